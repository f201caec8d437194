//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dotenv::ConflictPolicy;
use crate::utils::global_config_file;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// Defaults for `merge`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Destination file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Line written after every entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// How conflicts are resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<ConflictPolicy>,
}

/// Defaults for `validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Schema file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
}

/// Appearance configuration settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Color mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
    /// Show the banner on interactive terminals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<bool>,
}

impl AppearanceConfig {
    /// Effective color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }

    /// Whether the banner is shown (on by default).
    pub fn show_banner(&self) -> bool {
        self.banner.unwrap_or(true)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Merge defaults.
    #[serde(default)]
    pub merge: MergeConfig,
    /// Validation defaults.
    #[serde(default)]
    pub validate: ValidateConfig,
    /// Appearance settings.
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        global_config_file()
    }

    /// Merge another config into this one. Values set in `other` win;
    /// unset values leave this config untouched.
    pub fn merge(&mut self, other: Config) {
        let Config {
            merge,
            validate,
            appearance,
        } = other;

        if merge.output.is_some() {
            self.merge.output = merge.output;
        }
        if merge.separator.is_some() {
            self.merge.separator = merge.separator;
        }
        if merge.on_conflict.is_some() {
            self.merge.on_conflict = merge.on_conflict;
        }

        if validate.schema.is_some() {
            self.validate.schema = validate.schema;
        }

        if appearance.color.is_some() {
            self.appearance.color = appearance.color;
        }
        if appearance.banner.is_some() {
            self.appearance.banner = appearance.banner;
        }
    }
}
