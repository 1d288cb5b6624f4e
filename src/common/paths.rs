//! Platform-appropriate configuration paths

use std::path::PathBuf;

/// Name used for configuration directories
const APP_NAME: &str = "smoketest-cli";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/smoketest-cli/`
/// - macOS: `~/Library/Application Support/smoketest-cli/`
/// - Windows: `%APPDATA%\smoketest-cli\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the user's home directory, for `~` expansion in key paths
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}
