//! Rendering of validation results.

use colored::{Color, Colorize};

use super::check::ValidationReport;
use crate::ui::{boxed, BorderStyle, Frame, Table};

const FILE_WIDTH: usize = 30;
const KEYS_WIDTH: usize = 45;

/// Schema line printed before validating.
pub fn render_schema_header(schema_path: &str, required: &[String]) -> String {
    format!(
        "{} {}\n→ Required keys: {}",
        "Using schema from:".blue().bold(),
        schema_path.cyan(),
        required.join(", ").magenta()
    )
}

/// Render the report: a framed verdict followed by a table when relevant.
pub fn render_report(report: &ValidationReport) -> String {
    if report.passed() {
        render_success(report)
    } else {
        render_failure(report)
    }
}

fn render_failure(report: &ValidationReport) -> String {
    let failing = report.failing().count();
    let with_extra = report.with_extra().count();

    let message = [
        "✗ Validation Failed".to_string(),
        String::new(),
        format!("Found missing variables in {failing} file(s)."),
        format!("Found extra variables in {with_extra} file(s)."),
    ]
    .iter()
    .map(|line| line.red().bold().to_string())
    .collect::<Vec<_>>()
    .join("\n");
    let frame = boxed(
        &message,
        &Frame {
            style: BorderStyle::Round,
            color: Some(Color::Red),
            title: Some("Config Validator".red().bold().to_string()),
            padding: 1,
        },
    );

    let mut table = Table::new(
        &["File", "Missing Variables", "Extra Variables"],
        &[FILE_WIDTH, KEYS_WIDTH, KEYS_WIDTH],
    )
    .column_color(1, Color::Red)
    .column_color(2, Color::Yellow);

    for file in report.failing() {
        let extra = if file.has_extra() {
            file.extra.join(", ")
        } else {
            "none".to_string()
        };
        table.push_row(&[
            file.file.display().to_string(),
            file.missing.join(", "),
            extra,
        ]);
    }

    format!("{frame}\n{}", table.render())
}

fn render_success(report: &ValidationReport) -> String {
    let message = format!(
        "✓ All {} file(s) are valid and meet schema requirements.",
        report.files.len()
    );
    let mut out = boxed(
        &message.green().bold().to_string(),
        &Frame {
            style: BorderStyle::Round,
            color: Some(Color::Green),
            title: Some("Validation Successful".green().to_string()),
            padding: 1,
        },
    );

    let with_extra: Vec<_> = report.with_extra().collect();
    if !with_extra.is_empty() {
        out.push('\n');
        out.push_str(
            &format!(
                "[!] Found extra variables (not defined in the schema) in {} file(s).",
                with_extra.len()
            )
            .yellow()
            .to_string(),
        );
        out.push('\n');

        let mut table =
            Table::new(&["File", "Extra Variables"], &[FILE_WIDTH, KEYS_WIDTH])
                .column_color(0, Color::Red)
                .column_color(1, Color::Yellow);
        for file in with_extra {
            table.push_row(&[file.file.display().to_string(), file.extra.join(", ")]);
        }
        out.push_str(&table.render());
    }

    out
}
