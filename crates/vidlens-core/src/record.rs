//! Catalog candidate and assembled metadata record.

use std::fmt::Write as _;

/// Poster shown when neither the title nor the season has artwork.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/150";

/// Base URL prepended to TMDB image paths.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// Base URL for YouTube trailers.
pub const TRAILER_BASE_URL: &str = "https://www.youtube.com/watch?v=";

/// Watch-provider region used when none is configured.
pub const DEFAULT_WATCH_REGION: &str = "IN";

/// Display names for the original-language codes users see most.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("hi", "Hindi"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
];

/// Maps an ISO 639-1 code to a display name; unknown codes are upper-cased.
#[must_use]
pub fn language_name(code: &str) -> String {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or_else(|| code.to_uppercase(), |(_, name)| (*name).to_owned())
}

/// Escapes `&`, `<`, `>`, `"` and `'` for the HTML caption.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds a full image URL from a TMDB image path.
#[must_use]
pub fn image_url(path: &str) -> String {
    format!("{IMAGE_BASE_URL}{path}")
}

/// Whether a catalog hit is a film or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Feature film.
    Movie,
    /// TV series (anything the catalog does not report as a movie).
    Series,
}

impl MediaKind {
    /// Infers the kind from a catalog `media_type` string.
    #[must_use]
    pub fn from_media_type(media_type: Option<&str>) -> Self {
        if media_type == Some("movie") {
            Self::Movie
        } else {
            Self::Series
        }
    }

    /// Base label shown in captions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }
}

/// Top-ranked catalog search hit for a title.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCandidate {
    /// Movie or series.
    pub kind: MediaKind,
    /// Catalog ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Full poster URL (placeholder when the catalog has none).
    pub poster_url: String,
    /// Original language code (ISO 639-1).
    pub original_language: Option<String>,
    /// Release date (movies) or first air date (series).
    pub release_date: Option<String>,
    /// Vote average.
    pub vote_average: Option<f64>,
}

/// Fully defaulted metadata describing a movie, series, season or episode.
///
/// Every descriptive line is a plain `String`; an unavailable data point
/// is an empty string, never a missing field. Non-empty lines end with
/// a newline so a caption is their concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Kind label, e.g. `Movie` or `Series - Season 2 Episode 3`.
    pub kind: String,
    /// Display name, e.g. `Money Heist - Aikido`.
    pub name: String,
    /// Poster URL.
    pub poster_url: String,
    /// Release or air date.
    pub release_line: String,
    /// Rating.
    pub rating_line: String,
    /// Runtime or average episode runtime.
    pub duration_line: String,
    /// Season count or the selected season's episode count.
    pub season_line: String,
    /// Selected episode code.
    pub episode_line: String,
    /// Original audio language.
    pub audio_line: String,
    /// Genre hashtags.
    pub genre_line: String,
    /// Trailer link.
    pub trailer_line: String,
    /// Streaming platforms.
    pub platforms_line: String,
}

impl MetadataRecord {
    /// Keys of the optional lines, in caption order.
    pub const LINE_KEYS: [&'static str; 9] = [
        "release_line",
        "rating_line",
        "duration_line",
        "season_line",
        "episode_line",
        "audio_line",
        "genre_line",
        "trailer_line",
        "platforms_line",
    ];

    /// Starts a record with the candidate's identity and every line empty.
    #[must_use]
    pub fn for_candidate(candidate: &CatalogCandidate) -> Self {
        Self {
            kind: candidate.kind.label().to_owned(),
            name: candidate.name.clone(),
            poster_url: candidate.poster_url.clone(),
            ..Self::default()
        }
    }

    /// Returns every optional line with its key, in caption order.
    #[must_use]
    pub fn lines(&self) -> [(&'static str, &str); 9] {
        let [release, rating, duration, season, episode, audio, genre, trailer, platforms] =
            Self::LINE_KEYS;
        [
            (release, self.release_line.as_str()),
            (rating, self.rating_line.as_str()),
            (duration, self.duration_line.as_str()),
            (season, self.season_line.as_str()),
            (episode, self.episode_line.as_str()),
            (audio, self.audio_line.as_str()),
            (genre, self.genre_line.as_str()),
            (trailer, self.trailer_line.as_str()),
            (platforms, self.platforms_line.as_str()),
        ]
    }

    /// Renders the HTML caption posted alongside the poster.
    ///
    /// Name and kind are escaped here; line renderers escape catalog text
    /// as they build each line.
    #[must_use]
    pub fn caption(&self) -> String {
        let mut caption = format!(
            "<b>{}</b>\n\nType :- {}\n",
            escape_html(&self.name),
            escape_html(&self.kind)
        );
        for (_, line) in self.lines() {
            caption.push_str(line);
        }
        caption
    }
}

/// Renders `Release Date :- <date> IN`.
pub(crate) fn release_line(date: &str) -> String {
    format!("Release Date :- {} IN\n", escape_html(date))
}

/// Renders `Air Date :- <date> IN`.
pub(crate) fn air_date_line(date: &str) -> String {
    format!("Air Date :- {} IN\n", escape_html(date))
}

/// Renders `Rating :- <x.y>`.
pub(crate) fn rating_line(vote_average: f64) -> String {
    format!("Rating :- {vote_average:.1}\n")
}

/// Renders a movie runtime as `Duration :- {H}h {M}m`.
pub(crate) fn movie_duration_line(runtime: u32) -> String {
    let hours = runtime / 60;
    let minutes = runtime % 60;
    format!("Duration :- {hours}h {minutes}m\n")
}

/// Renders a hashtag genre line; empty when there are no genres.
pub(crate) fn genre_line<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut tags = String::new();
    for name in names {
        if !tags.is_empty() {
            tags.push(' ');
        }
        let _ = write!(tags, "#{}", escape_html(&name.to_lowercase()));
    }
    if tags.is_empty() {
        tags
    } else {
        format!("Genre :- {tags}\n")
    }
}

/// Renders an HTML trailer anchor for a YouTube key.
pub(crate) fn trailer_line(key: &str) -> String {
    format!(
        "Trailer :- <a href='{TRAILER_BASE_URL}{}'>Click Here</a>\n",
        escape_html(key)
    )
}

/// Renders `Original Audio :- <language>`.
pub(crate) fn audio_line(code: &str) -> String {
    format!("Original Audio :- {}\n", escape_html(&language_name(code)))
}

/// Renders a comma-joined platform list; empty when there are none.
pub(crate) fn platforms_line<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<String> = names.into_iter().map(escape_html).collect();
    if names.is_empty() {
        String::new()
    } else {
        format!("Platforms :- {}\n", names.join(", "))
    }
}
