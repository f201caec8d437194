//! Configuration module for configforge.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - Project-level `.configforgerc.toml`
//! - User-level `~/.config/configforge/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{AppearanceConfig, ColorMode, Config, MergeConfig, ValidateConfig};
