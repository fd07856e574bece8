//! Metadata assembly: fans out secondary catalog lookups for a resolved
//! candidate and merges whatever comes back into a [`MetadataRecord`].
//!
//! Only the primary search may end a resolution. Every lookup here is
//! optional: a failure, timeout, or empty answer leaves its line empty
//! and assembly carries on.

use anyhow::Result;
use tracing::instrument;
use vidlens_api::tmdb::{
    LocalTmdbApi, TmdbGenre, TmdbMediaType, TmdbMovieDetails, TmdbTvDetails, TmdbTvSeason,
    TmdbVideosResponse,
};

use crate::query::Extraction;
use crate::record::{
    CatalogCandidate, MediaKind, MetadataRecord, air_date_line, audio_line, genre_line,
    image_url, movie_duration_line, platforms_line, rating_line, release_line, trailer_line,
};

/// Kind-specific details response.
enum KindDetails {
    Movie(TmdbMovieDetails),
    Series(TmdbTvDetails),
}

impl KindDetails {
    fn genres(&self) -> &[TmdbGenre] {
        match self {
            Self::Movie(m) => &m.genres,
            Self::Series(tv) => &tv.genres,
        }
    }
}

/// Downgrades a failed secondary lookup to "no data".
fn secondary<T>(lookup: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(lookup, error = %e, "secondary lookup failed, leaving line empty");
            None
        }
    }
}

const fn media_type(kind: MediaKind) -> TmdbMediaType {
    match kind {
        MediaKind::Movie => TmdbMediaType::Movie,
        MediaKind::Series => TmdbMediaType::Tv,
    }
}

/// Assembles the metadata record for a resolved candidate.
///
/// Runs the details, season, videos and watch-provider lookups
/// concurrently, then applies them in a fixed order: search-row data,
/// kind-specific details, season and episode overrides, then language,
/// genres, trailer and platforms. `region` selects the watch-provider
/// country (ISO 3166-1).
#[instrument(skip(api, candidate, extraction), fields(id = candidate.id, kind = ?candidate.kind))]
pub async fn assemble(
    api: &(impl LocalTmdbApi + Sync),
    candidate: &CatalogCandidate,
    extraction: &Extraction,
    query: &str,
    region: &str,
) -> MetadataRecord {
    let id = candidate.id;
    let media = media_type(candidate.kind);
    let season_number = match candidate.kind {
        MediaKind::Series => extraction.season,
        MediaKind::Movie => None,
    };

    let details = async {
        match candidate.kind {
            MediaKind::Movie => api.movie_details(id).await.map(KindDetails::Movie),
            MediaKind::Series => api.tv_details(id).await.map(KindDetails::Series),
        }
    };
    let season = async {
        match season_number {
            Some(n) => Some(api.tv_season(id, n).await),
            None => None,
        }
    };

    let (details, season, videos, providers) = tokio::join!(
        details,
        season,
        api.videos(media, id),
        api.watch_providers(media, id),
    );

    let mut record = MetadataRecord::for_candidate(candidate);

    if let Some(date) = &candidate.release_date {
        record.release_line = release_line(date);
    }
    if let Some(vote) = candidate.vote_average.filter(|v| *v > 0.0) {
        record.rating_line = rating_line(vote);
    }

    let details = secondary("details", details);
    let series_runtime = apply_details(&mut record, details.as_ref());

    if let (Some(n), Some(season)) = (
        season_number,
        season.and_then(|r| secondary("season", r)),
    ) {
        apply_season(
            &mut record,
            candidate,
            &season,
            n,
            extraction.episode,
            series_runtime,
        );
    }

    if let Some(code) = &candidate.original_language {
        record.audio_line = audio_line(code);
    }
    if let Some(details) = &details {
        record.genre_line = genre_line(details.genres().iter().map(|g| g.name.as_str()));
    }
    if let Some(videos) = secondary("videos", videos) {
        record.trailer_line = youtube_trailer(&videos).map_or_else(String::new, trailer_line);
    }
    if let Some(providers) = secondary("watch_providers", providers) {
        record.platforms_line = platforms_line(
            providers
                .flatrate(region)
                .iter()
                .map(|p| p.provider_name.as_str()),
        );
    }

    tracing::debug!(query, kind = %record.kind, name = %record.name, "assembled metadata");
    record
}

/// Applies movie runtime or series season count/runtime.
///
/// Returns the series' average episode runtime for the episode fallback.
fn apply_details(record: &mut MetadataRecord, details: Option<&KindDetails>) -> Option<u32> {
    match details? {
        KindDetails::Movie(movie) => {
            if let Some(runtime) = movie.runtime.filter(|r| *r > 0) {
                record.duration_line = movie_duration_line(runtime);
            }
            None
        }
        KindDetails::Series(tv) => {
            if let Some(seasons) = tv.number_of_seasons.filter(|n| *n > 0) {
                record.season_line = format!("Total Season :- {seasons}\n");
            }
            let runtime = tv.episode_run_time.first().copied().filter(|r| *r > 0);
            if let Some(runtime) = runtime {
                record.duration_line = format!("Avg Episode Duration :- {runtime}m\n");
            }
            runtime
        }
    }
}

/// Narrows the record to one season and, if found, one episode.
fn apply_season(
    record: &mut MetadataRecord,
    candidate: &CatalogCandidate,
    season: &TmdbTvSeason,
    season_number: u32,
    episode_number: Option<u32>,
    series_runtime: Option<u32>,
) {
    record.kind = format!("Series - Season {season_number}");
    record.season_line = format!(
        "Season {season_number} Episodes :- {}\n",
        season.episodes.len()
    );
    if let Some(poster) = season.poster_path.as_deref().filter(|p| !p.is_empty()) {
        record.poster_url = image_url(poster);
    }

    let Some(episode_number) = episode_number else {
        return;
    };
    let Some(episode) = season
        .episodes
        .iter()
        .find(|e| e.episode_number == episode_number)
    else {
        tracing::debug!(
            season = season_number,
            episode = episode_number,
            "episode not listed in season"
        );
        return;
    };

    record.kind = format!("Series - Season {season_number} Episode {episode_number}");
    record.name = format!("{} - {}", candidate.name, episode.name);
    record.episode_line = format!("Episode :- S{season_number:02}E{episode_number:02}\n");
    record.release_line = episode
        .air_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .map_or_else(String::new, air_date_line);
    record.duration_line = episode
        .runtime
        .filter(|r| *r > 0)
        .or(series_runtime)
        .map_or_else(String::new, |m| format!("Duration :- {m}m\n"));
    if let Some(vote) = episode.vote_average.filter(|v| *v > 0.0) {
        record.rating_line = rating_line(vote);
    }
}

/// Key of the first YouTube trailer, if any.
fn youtube_trailer(videos: &TmdbVideosResponse) -> Option<&str> {
    videos
        .results
        .iter()
        .find(|v| v.video_type == "Trailer" && v.site == "YouTube" && !v.key.is_empty())
        .map(|v| v.key.as_str())
}
