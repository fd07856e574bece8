//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the user config root.
const APP_DIR: &str = "vidlens";

/// Resolves the config file path.
///
/// Lookup order: `{dir}/config.toml` when `--dir` is given, then
/// `$XDG_CONFIG_HOME/vidlens/config.toml`, then
/// `$HOME/.config/vidlens/config.toml`.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and neither `XDG_CONFIG_HOME`
/// nor `HOME` is set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }
    let xdg = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty());
    let home = std::env::var_os("HOME").filter(|v| !v.is_empty());
    config_path_from(xdg.as_deref().map(Path::new), home.as_deref().map(Path::new))
}

fn config_path_from(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Result<PathBuf> {
    let root = match (xdg_config_home, home) {
        (Some(xdg), _) => xdg.to_path_buf(),
        (None, Some(home)) => home.join(".config"),
        (None, None) => bail!("neither XDG_CONFIG_HOME nor HOME is set; pass --dir"),
    };
    Ok(root.join(APP_DIR).join(CONFIG_FILE))
}
