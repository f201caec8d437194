//! `configforge validate`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use super::Context;
use crate::cli::ValidateArgs;
use crate::error::ForgeError;
use crate::prompt::Prompt;
use crate::utils::display_relative;
use crate::validate::{render_report, render_schema_header, validate_files, Schema, DEFAULT_SCHEMA};

/// Validate files against the schema and print the report.
///
/// # Errors
///
/// Returns [`ForgeError::ValidationFailed`] after printing the report when
/// any file misses a required key; schema and file errors abort first.
pub fn run_validate<P: Prompt, W: Write>(
    args: &ValidateArgs,
    ctx: &mut Context<P, W>,
) -> Result<()> {
    let schema_path = args
        .schema
        .clone()
        .or_else(|| ctx.config.validate.schema.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA));
    let schema_path = ctx.working_dir.join(schema_path);

    let schema = Schema::load(&schema_path)?;
    let header = render_schema_header(
        &display_relative(&schema_path, &ctx.working_dir),
        &schema.required,
    );
    ctx.say(&header);

    let report = validate_files(&args.files, &schema)?;
    ctx.say(&render_report(&report));

    if !report.passed() {
        return Err(ForgeError::ValidationFailed {
            files: report.failing().count(),
        }
        .into());
    }
    Ok(())
}
