pub mod schema;
pub mod watcher;

pub use schema::{GlobalConfig, ThemeConfig, TvConfig};
pub use watcher::ConfigWatcher;

use std::path::{Path, PathBuf};
use tv_core::{Result, TvError};

/// Load configuration from a TOML file.  Returns `TvConfig::default()` if
/// the file doesn't exist so the app always starts.
pub fn load(path: impl AsRef<Path>) -> Result<TvConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(TvConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| TvError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| TvError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config").join("tv").join("tv.toml")
}

/// Return the default data directory, honouring `$XDG_DATA_HOME`.
pub fn default_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share").join("tv")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    std::env::var(var).map(PathBuf::from).unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(home_fallback)
    })
}
