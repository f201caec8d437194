//! `configforge encrypt` and `configforge decrypt`.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use super::Context;
use crate::cli::CryptArgs;
use crate::crypto::Direction;
use crate::error::ForgeError;
use crate::prompt::Prompt;
use crate::ui;

/// Encrypt or decrypt every file independently.
///
/// Existing outputs are confirmed once up front. A file that fails is
/// reported and skipped; the remaining files are still processed.
///
/// # Errors
///
/// Returns [`ForgeError::Cancelled`] if the operator declines, or
/// [`ForgeError::PartialFailure`] if any file could not be processed.
pub fn run_crypt<P: Prompt, W: Write>(
    direction: Direction,
    args: &CryptArgs,
    ctx: &mut Context<P, W>,
) -> Result<()> {
    let existing: Vec<_> = args
        .files
        .iter()
        .map(|file| direction.output_path(file))
        .filter(|output| output.exists())
        .collect();

    if !existing.is_empty() {
        for output in &existing {
            ctx.say(&ui::warning(&format!(
                "{} already exists and will be overwritten!",
                output.display()
            )));
        }
        let question = format!(
            "Continue {} and overwrite existing file(s)?",
            direction.noun().to_lowercase()
        );
        if !ctx.confirm_overwrite(&question)? {
            return Err(ForgeError::Cancelled {
                operation: direction.noun().to_string(),
            }
            .into());
        }
    }

    ctx.say(
        &format!("Starting {} process...", direction.noun().to_lowercase())
            .bright_cyan()
            .to_string(),
    );

    let mut failed = 0;
    for file in &args.files {
        match direction.apply(file, &args.key) {
            Ok(output) => ctx.say(&format!(
                "{} {} {}",
                ui::success(&format!("Successfully {}:", direction.past())),
                file.display(),
                format!("→ {}", output.display()).blue()
            )),
            Err(err) => {
                warn!(file = %file.display(), error = %err, "file skipped");
                failed += 1;
                ctx.say(&ui::failure(&format!(
                    "Could not process {}: {err}",
                    file.display()
                )));
            }
        }
    }

    ctx.say(
        &format!("{} process completed.", direction.noun())
            .bright_cyan()
            .to_string(),
    );

    if failed > 0 {
        return Err(ForgeError::PartialFailure {
            operation: direction.past().to_string(),
            failed,
            total: args.files.len(),
        }
        .into());
    }
    Ok(())
}
