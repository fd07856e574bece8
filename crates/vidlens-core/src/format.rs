//! Display helpers for stored video entries.

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Formats a byte count with binary units: `512 B`, `1.50 KB`, `2.00 GB`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn human_file_size(bytes: u64) -> String {
    let (unit, divisor) = match bytes {
        b if b < KIB => return format!("{b} B"),
        b if b < MIB => ("KB", KIB),
        b if b < GIB => ("MB", MIB),
        _ => ("GB", GIB),
    };
    format!("{:.2} {unit}", bytes as f64 / divisor as f64)
}
