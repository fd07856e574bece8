//! TMDB API response types and search parameters.
//!
//! TMDB omits or nulls fields freely, so every field that is not an
//! identifier defaults instead of failing deserialization.

use std::collections::HashMap;

use serde::Deserialize;

// --- Media type ---

/// Path segment selecting the movie or TV flavour of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TmdbMediaType {
    /// `movie/...` endpoints.
    Movie,
    /// `tv/...` endpoints.
    Tv,
}

impl TmdbMediaType {
    /// Returns the URL path segment for this media type.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

// --- Search Multi ---

/// Response from `search/multi` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSearchMultiResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Search results, ranked by TMDB.
    #[serde(default)]
    pub results: Vec<TmdbMultiSearchResult>,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single row of a multi-type search (movie, tv or person).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMultiSearchResult {
    /// TMDB ID.
    pub id: u64,
    /// Media type (`"movie"`, `"tv"`, `"person"`).
    #[serde(default)]
    pub media_type: Option<String>,
    /// Movie title.
    #[serde(default)]
    pub title: Option<String>,
    /// Series name.
    #[serde(default)]
    pub name: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Movie release date (YYYY-MM-DD).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Series first air date (YYYY-MM-DD).
    #[serde(default)]
    pub first_air_date: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

// --- Movie Details ---

/// Response from `movie/{movie_id}` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

// --- TV Details ---

/// Response from `tv/{series_id}` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbTvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    #[serde(default)]
    pub name: Option<String>,
    /// Total number of seasons.
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    /// Total number of episodes.
    #[serde(default)]
    pub number_of_episodes: Option<u32>,
    /// Typical episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Genre entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// --- TV Season Details ---

/// Response from `tv/{series_id}/season/{season_number}` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbTvSeason {
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    #[serde(default)]
    pub name: Option<String>,
    /// Air date.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Season poster path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Episodes in this season.
    #[serde(default)]
    pub episodes: Vec<TmdbEpisode>,
}

/// A single episode within a season.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbEpisode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode name.
    #[serde(default)]
    pub name: String,
    /// Air date.
    #[serde(default)]
    pub air_date: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: Option<f64>,
}

// --- Videos ---

/// Response from `{movie|tv}/{id}/videos` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbVideosResponse {
    /// Video entries.
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}

/// A video attached to a title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbVideo {
    /// Site-specific key (YouTube video ID).
    #[serde(default)]
    pub key: String,
    /// Hosting site (e.g., `"YouTube"`).
    #[serde(default)]
    pub site: String,
    /// Video type (e.g., `"Trailer"`, `"Teaser"`).
    #[serde(rename = "type", default)]
    pub video_type: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

// --- Watch Providers ---

/// Response from `{movie|tv}/{id}/watch/providers` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbWatchProvidersResponse {
    /// Providers keyed by region (ISO 3166-1).
    #[serde(default)]
    pub results: HashMap<String, TmdbRegionProviders>,
}

impl TmdbWatchProvidersResponse {
    /// Returns the subscription providers for `region`, or an empty slice.
    #[must_use]
    pub fn flatrate(&self, region: &str) -> &[TmdbProvider] {
        self.results
            .get(region)
            .map(|r| r.flatrate.as_slice())
            .unwrap_or_default()
    }
}

/// Providers available in one region.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbRegionProviders {
    /// TMDB watch page link.
    #[serde(default)]
    pub link: Option<String>,
    /// Subscription (streaming) providers.
    #[serde(default)]
    pub flatrate: Vec<TmdbProvider>,
    /// Rental providers.
    #[serde(default)]
    pub rent: Vec<TmdbProvider>,
    /// Purchase providers.
    #[serde(default)]
    pub buy: Vec<TmdbProvider>,
}

/// A single watch provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbProvider {
    /// Provider ID.
    pub provider_id: u32,
    /// Provider name.
    pub provider_name: String,
    /// Display priority.
    #[serde(default)]
    pub display_priority: Option<u32>,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[allow(dead_code)]
    #[serde(default)]
    pub success: bool,
}

// --- Search Parameters ---

/// Parameters for `search/multi` endpoint.
#[derive(Debug, Clone)]
pub struct SearchMultiParams {
    /// Search query (required).
    pub query: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchMultiParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            include_adult: false,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
