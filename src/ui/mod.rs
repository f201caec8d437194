//! Terminal output helpers.
//!
//! Color handling, boxed frames and bordered tables used by the command
//! reports. All renderers return strings so they can be tested without a
//! terminal.

mod frame;
mod table;

use std::io::{self, IsTerminal};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::config::ColorMode;

pub use frame::{boxed, BorderStyle, Frame};
pub use table::Table;

/// Apply the color mode for the rest of the process.
///
/// `Auto` leaves the decision to `colored`, which honors `NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE` and whether stdout is a terminal.
pub fn configure_colors(mode: ColorMode) {
    match color_override(mode) {
        Some(enabled) => colored::control::set_override(enabled),
        None => colored::control::unset_override(),
    }
}

fn color_override(mode: ColorMode) -> Option<bool> {
    match mode {
        ColorMode::Always => Some(true),
        ColorMode::Never => Some(false),
        ColorMode::Auto => None,
    }
}

/// Printed width of `text` in terminal cells, ignoring ANSI escape
/// sequences. Wide characters such as CJK count as two cells.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequences end with a byte in '@'..='~'.
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        plain.push(c);
    }
    plain.width()
}

/// Program banner shown on interactive terminals.
pub fn banner() -> String {
    boxed(
        "CONFIGFORGE CLI ⌬",
        &Frame {
            style: BorderStyle::Double,
            padding: 1,
            ..Frame::default()
        },
    )
}

/// Print the banner to stderr when it is a terminal.
pub fn print_banner(enabled: bool) {
    if enabled && io::stderr().is_terminal() {
        eprintln!("{}", banner());
    }
}

/// `✓ message` in green.
pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message.green())
}

/// `! message` in yellow.
pub fn warning(message: &str) -> String {
    format!("{} {}", "!".yellow().bold(), message.yellow())
}

/// `✗ message` in red.
pub fn failure(message: &str) -> String {
    format!("{} {}", "✗".red().bold(), message.red())
}
