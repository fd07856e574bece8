//! In-memory catalog used by the pipeline's unit tests.
#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};
use vidlens_api::tmdb::{
    LocalTmdbApi, SearchMultiParams, TmdbMediaType, TmdbMovieDetails, TmdbSearchMultiResponse,
    TmdbTvDetails, TmdbTvSeason, TmdbVideosResponse, TmdbWatchProvidersResponse,
};

/// Canned catalog responses; `None` makes the matching endpoint fail.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    pub search: Option<TmdbSearchMultiResponse>,
    pub movie: Option<TmdbMovieDetails>,
    pub tv: Option<TmdbTvDetails>,
    pub season: Option<TmdbTvSeason>,
    pub videos: Option<TmdbVideosResponse>,
    pub providers: Option<TmdbWatchProvidersResponse>,
    calls: AtomicUsize,
}

fn parse<T: serde::de::DeserializeOwned>(json: &str) -> Option<T> {
    Some(serde_json::from_str(json).unwrap())
}

impl FakeCatalog {
    /// A series with a season 2 and trailer/provider data.
    pub fn money_heist() -> Self {
        Self {
            search: parse(include_str!(
                "../../../fixtures/tmdb/search_multi_money_heist.json"
            )),
            tv: parse(include_str!("../../../fixtures/tmdb/tv_details_71446.json")),
            season: parse(include_str!("../../../fixtures/tmdb/tv_season_71446_2.json")),
            videos: parse(include_str!("../../../fixtures/tmdb/videos_71446.json")),
            providers: parse(include_str!(
                "../../../fixtures/tmdb/watch_providers_71446.json"
            )),
            ..Self::default()
        }
    }

    /// A movie with runtime, genres, trailer and providers.
    pub fn inception() -> Self {
        Self {
            search: parse(include_str!(
                "../../../fixtures/tmdb/search_multi_inception.json"
            )),
            movie: parse(include_str!("../../../fixtures/tmdb/movie_details_27205.json")),
            videos: parse(include_str!("../../../fixtures/tmdb/videos_27205.json")),
            providers: parse(include_str!(
                "../../../fixtures/tmdb/watch_providers_27205.json"
            )),
            ..Self::default()
        }
    }

    /// Number of endpoint calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T: Clone>(&self, endpoint: &str, value: Option<&T>) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match value {
            Some(v) => Ok(v.clone()),
            None => bail!("TMDB API error (HTTP 500 Internal Server Error): {endpoint}"),
        }
    }
}

impl LocalTmdbApi for FakeCatalog {
    async fn search_multi(&self, _params: &SearchMultiParams) -> Result<TmdbSearchMultiResponse> {
        self.answer("search/multi", self.search.as_ref())
    }

    async fn movie_details(&self, _movie_id: u64) -> Result<TmdbMovieDetails> {
        self.answer("movie", self.movie.as_ref())
    }

    async fn tv_details(&self, _series_id: u64) -> Result<TmdbTvDetails> {
        self.answer("tv", self.tv.as_ref())
    }

    async fn tv_season(&self, _series_id: u64, season_number: u32) -> Result<TmdbTvSeason> {
        let season = self
            .season
            .as_ref()
            .filter(|s| s.season_number == season_number);
        self.answer("tv/season", season)
    }

    async fn videos(&self, _media_type: TmdbMediaType, _id: u64) -> Result<TmdbVideosResponse> {
        self.answer("videos", self.videos.as_ref())
    }

    async fn watch_providers(
        &self,
        _media_type: TmdbMediaType,
        _id: u64,
    ) -> Result<TmdbWatchProvidersResponse> {
        self.answer("watch/providers", self.providers.as_ref())
    }
}
