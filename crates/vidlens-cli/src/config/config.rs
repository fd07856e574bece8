//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog client settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
    /// Bot identity used in deep links.
    #[serde(default)]
    pub bot: BotConfig,
}

/// `[tmdb]` section.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TmdbConfig {
    /// API base URL override.
    pub base_url: Option<String>,
    /// Response language (BCP 47).
    pub language: String,
    /// Watch-provider region (ISO 3166-1).
    pub region: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Minimum spacing between requests in milliseconds.
    pub min_interval_ms: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            language: String::from("en-US"),
            region: String::from(vidlens_core::DEFAULT_WATCH_REGION),
            timeout_secs: 10,
            min_interval_ms: 25,
        }
    }
}

impl TmdbConfig {
    /// Per-request timeout.
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Minimum request interval.
    pub const fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

/// `[bot]` section.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BotConfig {
    /// Bot username without the leading `@`.
    pub username: String,
    /// Deep-link host.
    pub host: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            username: String::from("vidlens_bot"),
            host: String::from("t.me"),
        }
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if `tmdb.timeout_secs` is zero.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Rejects values the client cannot run with.
    fn validate(&self) -> Result<()> {
        // A zero reqwest timeout fails every request immediately.
        if self.tmdb.timeout_secs == 0 {
            bail!("tmdb.timeout_secs must be greater than 0");
        }
        Ok(())
    }
}
