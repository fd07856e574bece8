//! Catalog client library for vidlens.
//!
//! Provides a client for the TMDB v3 API covering the endpoints the
//! metadata pipeline fans out to.

/// TMDB API client.
pub mod tmdb;
