//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{
    SearchMultiParams, TmdbMediaType, TmdbMovieDetails, TmdbSearchMultiResponse, TmdbTvDetails,
    TmdbTvSeason, TmdbVideosResponse, TmdbWatchProvidersResponse,
};

/// TMDB API trait.
///
/// Covers the endpoints the metadata pipeline consumes. Abstracted so the
/// pipeline can run against a fake catalog in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Searches movies, TV series and people in one request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_multi(&self, params: &SearchMultiParams) -> Result<TmdbSearchMultiResponse>;

    /// Fetches movie details (runtime, genres).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn movie_details(&self, movie_id: u64) -> Result<TmdbMovieDetails>;

    /// Fetches TV series details (season count, episode runtimes, genres).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_details(&self, series_id: u64) -> Result<TmdbTvDetails>;

    /// Fetches TV season details including episode list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn tv_season(&self, series_id: u64, season_number: u32) -> Result<TmdbTvSeason>;

    /// Lists videos (trailers, teasers, clips) attached to a title.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn videos(&self, media_type: TmdbMediaType, id: u64) -> Result<TmdbVideosResponse>;

    /// Lists watch providers for a title, keyed by region.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn watch_providers(
        &self,
        media_type: TmdbMediaType,
        id: u64,
    ) -> Result<TmdbWatchProvidersResponse>;
}
