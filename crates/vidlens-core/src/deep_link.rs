//! Deep-link tokens carried in a bot's `/start` parameter.
//!
//! A token is the URL-safe base64 encoding of the UTF-8 query with the
//! `=` padding stripped, so it survives inside a URL query string.

use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

/// A start-parameter token that cannot be turned back into a query.
#[derive(Debug, thiserror::Error)]
pub enum DeepLinkError {
    /// Token is empty after trimming.
    #[error("deep-link token is empty")]
    Empty,
    /// Token is not URL-safe base64.
    #[error("deep-link token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    /// Decoded bytes are not UTF-8.
    #[error("deep-link token does not decode to UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encodes `query` as a padding-free URL-safe base64 token.
#[must_use]
pub fn encode(query: &str) -> String {
    URL_SAFE_NO_PAD.encode(query.as_bytes())
}

/// Decodes a token produced by [`encode`].
///
/// Padding is restored to the next multiple of four before decoding, so
/// tokens with or without trailing `=` are accepted.
///
/// # Errors
///
/// Returns [`DeepLinkError`] when the token is empty, is not base64, or
/// does not decode to UTF-8.
pub fn decode(token: &str) -> Result<String, DeepLinkError> {
    let token = token.trim().trim_end_matches('=');
    if token.is_empty() {
        return Err(DeepLinkError::Empty);
    }

    let pad = (4 - token.len() % 4) % 4;
    let padded = format!("{token}{}", "=".repeat(pad));
    let bytes = URL_SAFE.decode(padded)?;
    Ok(String::from_utf8(bytes)?)
}

/// Builds `https://<host>/<bot>?start=<token>` for `query`.
#[must_use]
pub fn start_link(host: &str, bot_username: &str, query: &str) -> String {
    format!("https://{host}/{bot_username}?start={}", encode(query))
}

/// Pulls the token out of either a bare token or `/start <token>` text.
///
/// `/start` counts as the command only when it stands alone or is
/// followed by whitespace; `/startXYZ` is returned whole and fails to
/// decode. Returns `None` for a plain `/start` with no parameter.
#[must_use]
pub fn token_from_start_param(text: &str) -> Option<&str> {
    let text = text.trim();
    let token = match text.strip_prefix("/start") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => text,
    };
    (!token.is_empty()).then_some(token)
}
