//! Catalog resolution: residual title to top-ranked candidate.

use anyhow::Result;
use tracing::instrument;
use vidlens_api::tmdb::{LocalTmdbApi, SearchMultiParams, TmdbMultiSearchResult};

use crate::record::{CatalogCandidate, MediaKind, PLACEHOLDER_POSTER_URL, image_url};

/// Treats empty strings from the catalog the same as missing values.
fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Converts the first search row into a candidate.
fn to_candidate(row: &TmdbMultiSearchResult, title: &str) -> CatalogCandidate {
    let kind = MediaKind::from_media_type(row.media_type.as_deref());
    let name = non_empty(row.title.as_ref())
        .or_else(|| non_empty(row.name.as_ref()))
        .unwrap_or_else(|| title.to_owned());
    let poster_url = non_empty(row.poster_path.as_ref())
        .map_or_else(|| PLACEHOLDER_POSTER_URL.to_owned(), |p| image_url(&p));
    let release_date =
        non_empty(row.release_date.as_ref()).or_else(|| non_empty(row.first_air_date.as_ref()));

    CatalogCandidate {
        kind,
        id: row.id,
        name,
        poster_url,
        original_language: non_empty(row.original_language.as_ref()),
        release_date,
        vote_average: row.vote_average,
    }
}

/// Searches the catalog for `title` and returns its first result.
///
/// The catalog's own ranking is trusted; no re-ranking happens here.
/// A failed request, a timeout, or an empty result list all yield `None`.
pub async fn resolve(api: &(impl LocalTmdbApi + Sync), title: &str) -> Option<CatalogCandidate> {
    match try_resolve(api, title).await {
        Ok(candidate) => candidate,
        Err(e) => {
            tracing::warn!(error = %e, "catalog search failed");
            None
        }
    }
}

/// Like [`resolve`], but keeps a failed search apart from an empty one.
///
/// # Errors
///
/// Returns the transport or decoding error of the search request.
#[instrument(skip(api))]
pub async fn try_resolve(
    api: &(impl LocalTmdbApi + Sync),
    title: &str,
) -> Result<Option<CatalogCandidate>> {
    if title.trim().is_empty() {
        tracing::debug!("empty title, skipping catalog search");
        return Ok(None);
    }

    let response = api.search_multi(&SearchMultiParams::new(title)).await?;

    let Some(first) = response.results.first() else {
        tracing::info!("catalog search returned no results");
        return Ok(None);
    };

    let candidate = to_candidate(first, title);
    tracing::debug!(id = candidate.id, kind = ?candidate.kind, name = %candidate.name, "resolved candidate");
    Ok(Some(candidate))
}
