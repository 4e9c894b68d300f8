//! Data directory discovery and settings loading.

use crate::config::schema::Settings;
use crate::error::{DrygError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".dryg";

/// Name of the settings file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Resolve the data directory.
///
/// An explicit override (`--home` / `DRYG_HOME`) wins; otherwise
/// `~/.dryg`.
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME),
    }
}

/// Path of the settings file inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Load settings from a data directory.
///
/// A missing file yields defaults; a malformed one is an error.
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let path = config_path(data_dir);
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_settings(&content, &path)
}

/// Parse settings YAML.
pub fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(content).map_err(|e| DrygError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
