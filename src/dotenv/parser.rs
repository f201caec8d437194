//! Line parsing for `.env` text.

use std::path::Path;
use std::str::Lines;

use tracing::debug;

use super::types::{KeyValuePair, SourceFile};
use crate::error::{ForgeError, Result};

/// Lazy iterator over the declarations of a `.env` text.
///
/// Cloning restarts from the clone point.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    lines: Lines<'a>,
}

impl Iterator for Pairs<'_> {
    type Item = KeyValuePair;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().find_map(parse_line)
    }
}

/// Parse `.env` text into its declarations.
///
/// # Examples
///
/// ```
/// use configforge::dotenv::parse_pairs;
///
/// let text = "# db\nDB_URL=postgres://x?a=b\n\nEMPTY=\n";
/// let pairs: Vec<_> = parse_pairs(text).collect();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].value(), "postgres://x?a=b");
/// ```
pub fn parse_pairs(text: &str) -> Pairs<'_> {
    Pairs {
        lines: text.lines(),
    }
}

/// Parse a single line.
///
/// Returns `None` for blank lines, `#` comments, lines without a key and
/// lines whose value is empty.
pub fn parse_line(line: &str) -> Option<KeyValuePair> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = match line.split_once('=') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (line, ""),
    };

    // Empty values are treated as absent.
    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some(KeyValuePair::new(key, value))
}

/// Parse text that was read from `path`.
pub fn parse_source(path: &Path, text: &str) -> SourceFile {
    SourceFile::new(path, parse_pairs(text).collect())
}

/// Read and parse a `.env` file.
///
/// # Errors
///
/// Returns [`ForgeError::FileNotFound`] if the path does not exist, or an IO
/// error with path context if it cannot be read.
pub fn load_source(path: &Path) -> Result<SourceFile> {
    if !path.exists() {
        return Err(ForgeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| ForgeError::io("read", path, e))?;
    let source = parse_source(path, &text);
    debug!(path = %path.display(), pairs = source.len(), "parsed env file");

    Ok(source)
}
