//! Query normalization and season/episode extraction.
//!
//! Users type titles loosely: `"Money Heist Season 2 Episode 3"`,
//! `"money heist s2e3"`, `"MONEY HEIST S02 E03"`. Normalization folds all
//! of these onto one canonical form; extraction pulls the season and
//! episode numbers back out and leaves the bare title for the catalog search.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Runs of whitespace.
#[allow(clippy::expect_used)]
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("failed to compile whitespace regex"));

/// `season <N>` phrase with a 1-2 digit ASCII number.
#[allow(clippy::expect_used)]
static SEASON_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bseason\s+([0-9]{1,2})\b").expect("failed to compile season phrase regex")
});

/// `episode <N>` phrase with a 1-2 digit ASCII number.
#[allow(clippy::expect_used)]
static EPISODE_PHRASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bepisode\s+([0-9]{1,2})\b").expect("failed to compile episode phrase regex")
});

/// Glued `s<N>e<N>` token.
#[allow(clippy::expect_used)]
static COMBINED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bs([0-9]{1,2})e([0-9]{1,2})\b").expect("failed to compile combined marker regex")
});

/// Standalone single-digit `s<d>` / `e<d>` token.
#[allow(clippy::expect_used)]
static BARE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([se])([0-9])\b").expect("failed to compile bare marker regex")
});

/// Season number in any surface form; a trailing `e<N>` belongs to the same token.
#[allow(clippy::expect_used)]
static SEASON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:season\s+|s)([0-9]{1,2})(?:e[0-9]{1,2})?\b").expect("failed to compile season regex")
});

/// Episode number in any surface form, including the tail of `s<N>e<N>`.
#[allow(clippy::expect_used)]
static EPISODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:episode\s+|e|s[0-9]{1,2}e)([0-9]{1,2})\b").expect("failed to compile episode regex")
});

/// Every marker form, for stripping the residual title.
#[allow(clippy::expect_used)]
static MARKER_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:season\s+[0-9]{1,2}|episode\s+[0-9]{1,2}|s[0-9]{1,2}(?:e[0-9]{1,2})?|e[0-9]{1,2})\b")
        .expect("failed to compile marker strip regex")
});

/// Season/episode numbers recovered from a query plus what is left of the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Season number (1-99).
    pub season: Option<u32>,
    /// Episode number (1-99).
    pub episode: Option<u32>,
    /// Lowercased title with every marker removed.
    pub title: String,
}

/// Collapses whitespace runs to single spaces, trims and lowercases.
fn collapse(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").to_lowercase()
}

/// Zero-pads a 1-2 digit string to two places.
fn two_digits(digits: &str) -> String {
    format!("{digits:0>2}")
}

/// Returns the text of capture group `idx`, or an empty string.
fn group<'h>(caps: &Captures<'h>, idx: usize) -> &'h str {
    caps.get(idx).map_or("", |m| m.as_str())
}

/// Rewrites a query into its canonical form.
///
/// Whitespace is collapsed, text is lowercased, and `season N`,
/// `episode N`, `sN`, `eN` and `sNeN` markers become two-digit
/// `sNN`/`eNN` tokens. Only 1-2 digit ASCII numbers are markers; wider
/// or non-ASCII numbers are left as typed. Applying it twice gives the same result as once.
/// Empty or whitespace-only input is returned unchanged.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    if query.trim().is_empty() {
        return query.to_owned();
    }

    let text = collapse(query);
    let text = SEASON_PHRASE_RE.replace_all(&text, |caps: &Captures<'_>| {
        format!("s{}", two_digits(group(caps, 1)))
    });
    let text = EPISODE_PHRASE_RE.replace_all(&text, |caps: &Captures<'_>| {
        format!("e{}", two_digits(group(caps, 1)))
    });
    let text = COMBINED_MARKER_RE.replace_all(&text, |caps: &Captures<'_>| {
        format!(
            "s{}e{}",
            two_digits(group(caps, 1)),
            two_digits(group(caps, 2))
        )
    });
    let text = BARE_MARKER_RE.replace_all(&text, |caps: &Captures<'_>| {
        format!("{}{}", group(caps, 1), two_digits(group(caps, 2)))
    });
    text.into_owned()
}

/// Parses a 1-2 digit marker number, rejecting zero.
fn marker_number(caps: Option<Captures<'_>>) -> Option<u32> {
    caps.and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| (1..=99).contains(n))
}

/// Extracts season and episode numbers and the residual title from a query.
///
/// Accepts raw or normalized text. Season and episode are independent; a
/// query may carry either, both or neither. When no marker is present the
/// title equals [`normalize_query`] of the input.
#[must_use]
pub fn extract(query: &str) -> Extraction {
    let text = collapse(query);

    let season = marker_number(SEASON_RE.captures(&text));
    let episode = marker_number(EPISODE_RE.captures(&text));

    let stripped = MARKER_STRIP_RE.replace_all(&text, "");
    let title = collapse(&stripped);

    Extraction {
        season,
        episode,
        title,
    }
}
