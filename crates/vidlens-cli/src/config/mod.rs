//! Application configuration module.
//!
//! Reads the TOML config file holding catalog client settings and the
//! bot identity used for deep links.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use paths::resolve_config_path;
