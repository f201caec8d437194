//! `configforge config`.

use std::io::Write;

use anyhow::{Context as _, Result};

use super::Context;
use crate::cli::ConfigArgs;
use crate::config::generate_example_config;
use crate::prompt::Prompt;

/// Print the effective configuration, or a commented example.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn run_config<P: Prompt, W: Write>(args: &ConfigArgs, ctx: &mut Context<P, W>) -> Result<()> {
    let text = if args.example {
        generate_example_config()
    } else {
        toml::to_string_pretty(&ctx.config).context("Failed to serialize configuration")?
    };
    let _ = write!(ctx.out, "{text}");
    Ok(())
}
