//! Serialization of a merged mapping.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::parser::parse_pairs;
use super::types::MergedMapping;
use crate::error::{ForgeError, Result};

/// Default merge destination.
pub const DEFAULT_OUTPUT: &str = ".env.merged";

/// Reject separators that would be read back as declarations.
///
/// # Errors
///
/// Returns [`ForgeError::InvalidSeparator`] if the separator parses as a
/// `KEY=VALUE` line.
pub fn check_separator(separator: &str) -> Result<()> {
    if parse_pairs(separator).next().is_some() {
        return Err(ForgeError::InvalidSeparator {
            separator: separator.to_string(),
        });
    }
    Ok(())
}

/// Render `mapping` as `.env` text.
///
/// Entries keep insertion order. A non-empty `separator` is written as its
/// own line after every entry. The result ends with exactly one newline.
pub fn render(mapping: &MergedMapping, separator: Option<&str>) -> String {
    let separator = separator.filter(|s| !s.is_empty());

    let mut out = String::new();
    for (key, value) in mapping.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
        if let Some(sep) = separator {
            out.push_str(sep);
            out.push('\n');
        }
    }

    let mut content = out.trim_end().to_string();
    content.push('\n');
    content
}

/// Write rendered content, replacing any existing file.
///
/// # Errors
///
/// Returns an IO error with path context.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ForgeError::io("write", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote merged output");
    Ok(())
}
