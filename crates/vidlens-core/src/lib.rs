//! Media-query resolution pipeline for vidlens.
//!
//! Turns a free-text title query such as `"money heist s2e3"` into a
//! [`MetadataRecord`]: the query is normalized, season and episode
//! markers are extracted, the residual title is resolved against the
//! catalog, and secondary lookups are merged into a record whose missing
//! data points are empty lines rather than errors.

/// Metadata assembly from secondary catalog lookups.
pub mod assembler;
/// Deep-link token codec.
pub mod deep_link;
/// File size display helpers.
pub mod format;
/// Privacy-policy gate.
pub mod privacy;
/// Query normalization and season/episode extraction.
pub mod query;
/// Candidate and record types.
pub mod record;
/// Catalog resolution.
pub mod resolver;

#[cfg(test)]
mod fake;

use tracing::instrument;
use vidlens_api::tmdb::LocalTmdbApi;

pub use assembler::assemble;
pub use deep_link::DeepLinkError;
pub use query::{Extraction, extract, normalize_query};
pub use record::{CatalogCandidate, DEFAULT_WATCH_REGION, MediaKind, MetadataRecord};
pub use resolver::resolve;

/// Why a lookup produced no record.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The catalog has nothing for the query.
    #[error("no results found for '{0}'")]
    NotFound(String),
    /// The primary search failed or timed out.
    #[error("catalog search failed for '{query}'")]
    Upstream {
        /// Query as typed by the user.
        query: String,
        /// Underlying transport or decoding error.
        #[source]
        source: anyhow::Error,
    },
}

/// Runs the full pipeline for `query`.
///
/// Returns `None` when the catalog search fails or finds nothing;
/// secondary lookup failures only blank out individual lines.
pub async fn lookup(
    api: &(impl LocalTmdbApi + Sync),
    query: &str,
    region: &str,
) -> Option<MetadataRecord> {
    lookup_checked(api, query, region).await.ok()
}

/// Like [`lookup`], but reports why no record was produced.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when the title is empty or the search
/// has no results, and [`LookupError::Upstream`] when the search request
/// itself fails.
#[instrument(skip(api))]
pub async fn lookup_checked(
    api: &(impl LocalTmdbApi + Sync),
    query: &str,
    region: &str,
) -> Result<MetadataRecord, LookupError> {
    let normalized = normalize_query(query);
    let extraction = extract(&normalized);
    tracing::debug!(
        normalized = %normalized,
        title = %extraction.title,
        season = ?extraction.season,
        episode = ?extraction.episode,
        "parsed query"
    );

    let candidate = match resolver::try_resolve(api, &extraction.title).await {
        Ok(Some(candidate)) => candidate,
        Ok(None) => return Err(LookupError::NotFound(query.to_owned())),
        Err(source) => {
            tracing::warn!(error = %source, "catalog search failed");
            return Err(LookupError::Upstream {
                query: query.to_owned(),
                source,
            });
        }
    };

    Ok(assemble(api, &candidate, &extraction, query, region).await)
}
