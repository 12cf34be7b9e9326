//! Platform-specific configuration paths.
//!
//! - **User config**: `~/.config/clipscope/config.toml` (Linux),
//!   `~/Library/Application Support/clipscope/config.toml` (macOS),
//!   `%APPDATA%\clipscope\config.toml` (Windows)

use std::path::PathBuf;

use crate::error::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "clipscope";

/// File name of the user configuration.
const CONFIG_FILE: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user configuration file, whether or not it exists.
pub fn user_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// Returns the user configuration file if one exists.
pub fn find_user_config() -> Option<PathBuf> {
    let path = user_config_path();
    path.is_file().then_some(path)
}

/// Create the user configuration directory if needed and return it.
pub fn ensure_user_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_config_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}
