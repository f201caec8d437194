//! `configforge merge`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use colored::Colorize;
use tracing::debug;

use super::Context;
use crate::cli::MergeArgs;
use crate::dotenv::{
    check_separator, merge_files, render, render_summary, resolver_for, write_output,
    DEFAULT_OUTPUT,
};
use crate::error::ForgeError;
use crate::prompt::Prompt;
use crate::ui;

/// Merge the given files and write the result.
///
/// # Errors
///
/// Returns [`ForgeError::Cancelled`] if the operator declines to overwrite
/// the destination, and propagates parse, resolver and IO errors. Nothing is
/// written unless every input was merged.
pub fn run_merge<P: Prompt, W: Write>(args: &MergeArgs, ctx: &mut Context<P, W>) -> Result<()> {
    let output = args
        .output
        .clone()
        .or_else(|| ctx.config.merge.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let separator = args
        .separator
        .clone()
        .or_else(|| ctx.config.merge.separator.clone());
    let policy = args
        .policy_override()
        .or(ctx.config.merge.on_conflict)
        .unwrap_or_default();

    if let Some(sep) = separator.as_deref() {
        check_separator(sep)?;
    }
    debug!(?output, ?separator, ?policy, "merge settings");

    let names: Vec<String> = args.files.iter().map(|f| f.display().to_string()).collect();
    ctx.say(&format!(
        "{} {}",
        "→ Merging files:".bright_blue(),
        names.join(", ")
    ));

    if output.exists() {
        ctx.say(&ui::warning(&format!(
            "{} exists and will be overwritten!",
            output.display()
        )));
        if !ctx.confirm_overwrite("Continue merging?")? {
            return Err(ForgeError::Cancelled {
                operation: "Merging".to_string(),
            }
            .into());
        }
    }

    let outcome = merge_files(&args.files, resolver_for(policy, &mut ctx.prompt))?;

    let content = render(&outcome.mapping, separator.as_deref());
    write_output(&output, &content)
        .with_context(|| format!("Failed to write merged output to {}", output.display()))?;

    ctx.say(&render_summary(&outcome, &output));
    Ok(())
}
