//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::Config;
use crate::error::ForgeError;
use crate::utils::LOCAL_CONFIG_NAME;

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns [`ForgeError::FileNotFound`] if the file does not exist and
/// [`ForgeError::InvalidConfig`] if it is not valid TOML for [`Config`].
fn load_config_from_path(path: &Path) -> crate::error::Result<Config> {
    if !path.exists() {
        return Err(ForgeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| ForgeError::io("read", path, e))?;

    toml::from_str(&content).map_err(|e| ForgeError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })
}

fn merge_optional(config: &mut Config, path: &Path, scope: &str) {
    if !path.exists() {
        return;
    }
    match load_config_from_path(path) {
        Ok(layer) => {
            debug!(path = %path.display(), scope, "loaded config");
            config.merge(layer);
        }
        Err(e) => warn!("Failed to load {scope} config at {}: {e}", path.display()),
    }
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/configforge/config.toml` (user-level)
/// 2. `.configforgerc.toml` in `working_dir`
/// 3. `--config <path>`
///
/// Missing or broken default files are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the file given with `--config` cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        merge_optional(&mut config, &user_config_path, "user");
    }

    merge_optional(&mut config, &working_dir.join(LOCAL_CONFIG_NAME), "project");

    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        config.merge(cli_config);
    }

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r##"# configforge configuration file
# Place this file at ~/.config/configforge/config.toml for global settings
# or .configforgerc.toml in your working directory for project settings.
# Command-line flags always take precedence.

[merge]
# Destination of `configforge merge`
output = ".env.merged"

# Line written after every merged variable (omit for none).
# It must not look like KEY=VALUE; comments are safe.
# separator = "# ----"

# Conflict handling: "prompt", "keep-existing", "use-new", "fail"
on_conflict = "prompt"

[validate]
# JSON file of the form { "required": ["KEY", ...] }
schema = "config.schema.json"

[appearance]
# Colors: "auto", "always", "never"
color = "auto"

# Show the banner on interactive terminals
banner = true
"##
    .to_string()
}
