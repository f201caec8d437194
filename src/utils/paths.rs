//! Path utilities.

use std::path::{Path, PathBuf};

/// File name of the project-level config.
pub const LOCAL_CONFIG_NAME: &str = ".configforgerc.toml";

/// Get the config directory for configforge.
///
/// Returns `~/.config/configforge` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("configforge"))
}

/// Get the global config file path.
///
/// Returns `~/.config/configforge/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the local config file in `dir`, if there is one.
pub fn local_config_file(dir: &Path) -> Option<PathBuf> {
    let config_file = dir.join(LOCAL_CONFIG_NAME);
    config_file.exists().then_some(config_file)
}

/// Render `path` relative to `base` when it lies below it.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| format!("./{}", p.display()))
        .unwrap_or_else(|_| path.display().to_string())
}
