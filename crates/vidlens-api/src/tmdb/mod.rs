//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints used to resolve a
//! free-text title: multi search, movie/series/season details, videos
//! and watch providers.

mod api;
mod client;
mod rate_limiter;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    SearchMultiParams, TmdbEpisode, TmdbGenre, TmdbMediaType, TmdbMovieDetails,
    TmdbMultiSearchResult, TmdbProvider, TmdbRegionProviders, TmdbSearchMultiResponse,
    TmdbTvDetails, TmdbTvSeason, TmdbVideo, TmdbVideosResponse, TmdbWatchProvidersResponse,
};
