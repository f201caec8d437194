//! Human-readable merge summary.

use std::path::Path;

use colored::{Color, Colorize};

use super::merge::MergeOutcome;
use super::types::Conflict;
use crate::ui::{self, boxed, BorderStyle, Frame};

/// Render the summary printed after a successful merge.
pub fn render_summary(outcome: &MergeOutcome, destination: &Path) -> String {
    let mut out = ui::success(&format!(
        "Successfully merged {} file(s) → {}",
        outcome.files,
        destination.display()
    ));

    if outcome.has_conflicts() {
        out.push('\n');
        out.push_str(&render_conflicts(&outcome.conflicts));
    }

    out
}

/// Render the boxed conflict listing.
pub fn render_conflicts(conflicts: &[Conflict]) -> String {
    let mut lines = vec![format!(
        "[!] Found {} variable conflict(s):",
        conflicts.len()
    )];
    lines.extend(conflicts.iter().map(|c| {
        format!(
            "{}: \"{}\" → \"{}\" ({})",
            c.key.cyan(),
            c.old_value.red(),
            c.new_value.green(),
            format!("from {}", c.source.display()).yellow()
        )
    }));

    boxed(
        &lines.join("\n"),
        &Frame {
            style: BorderStyle::Double,
            color: Some(Color::Yellow),
            padding: 1,
            ..Frame::default()
        },
    )
}
