//! TMDB API request pacing.

use std::time::{Duration, Instant};

/// Default spacing between requests (~40 req/s, TMDB's documented ceiling).
const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(25);

/// Hands out request slots at least `min_interval` apart.
///
/// One metadata lookup fans out to several endpoints at once, so the
/// limiter reserves the next slot before sleeping. Concurrent callers
/// queue behind each other instead of all waking at the same instant.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbRateLimiter {
    /// Minimum spacing between two requests.
    min_interval: Duration,
    /// Earliest instant the next request may start.
    next_slot: Option<Instant>,
}

impl TmdbRateLimiter {
    /// Creates a limiter with the given minimum spacing.
    pub(crate) const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: None,
        }
    }

    /// Creates a limiter with the default spacing (25ms).
    pub(crate) const fn default_interval() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }

    /// Reserves the next slot and returns how long the caller must wait.
    pub(crate) fn reserve(&mut self) -> Duration {
        let now = Instant::now();
        let slot = self.next_slot.filter(|s| *s > now).unwrap_or(now);
        self.next_slot = slot.checked_add(self.min_interval);
        slot.saturating_duration_since(now)
    }
}

/// Waits for a slot on a shared limiter without holding the lock while sleeping.
pub(crate) async fn acquire(limiter: &tokio::sync::Mutex<TmdbRateLimiter>) {
    let delay = limiter.lock().await.reserve();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
