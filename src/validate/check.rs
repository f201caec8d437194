//! Checking `.env` files against a schema.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::schema::Schema;
use crate::dotenv::{load_source, KeyValuePair, MergedMapping};
use crate::error::Result;

/// Validation result for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The validated file.
    pub file: PathBuf,
    /// Required keys the file does not declare, in schema order.
    pub missing: Vec<String>,
    /// Declared keys the schema does not require, in file order.
    pub extra: Vec<String>,
}

impl FileReport {
    /// A file is valid when no required key is missing.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// Check whether the file declares keys outside the schema.
    pub fn has_extra(&self) -> bool {
        !self.extra.is_empty()
    }
}

/// Validation result for a set of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the schema requires.
    pub required: Vec<String>,
    /// Per-file results in argument order.
    pub files: Vec<FileReport>,
}

impl ValidationReport {
    /// Passes when every file declares every required key.
    pub fn passed(&self) -> bool {
        self.files.iter().all(FileReport::is_valid)
    }

    /// Files missing required keys.
    pub fn failing(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_valid())
    }

    /// Files declaring keys outside the schema.
    pub fn with_extra(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.has_extra())
    }
}

/// Check one file's declarations against `schema`.
///
/// Re-declared keys keep their last value, as a `.env` loader would.
pub fn check_pairs(
    file: &Path,
    pairs: impl IntoIterator<Item = KeyValuePair>,
    schema: &Schema,
) -> FileReport {
    let declared: MergedMapping = pairs.into_iter().collect();

    let missing = schema
        .required
        .iter()
        .filter(|key| !declared.contains_key(key))
        .cloned()
        .collect();
    let extra = declared
        .keys()
        .filter(|key| !schema.requires(key))
        .map(String::from)
        .collect();

    FileReport {
        file: file.to_path_buf(),
        missing,
        extra,
    }
}

/// Validate files in order.
///
/// # Errors
///
/// Returns [`ForgeError::FileNotFound`](crate::error::ForgeError::FileNotFound)
/// for the first missing file.
pub fn validate_files<P: AsRef<Path>>(paths: &[P], schema: &Schema) -> Result<ValidationReport> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let source = load_source(path.as_ref())?;
        let report = check_pairs(source.path(), source.pairs().iter().cloned(), schema);
        debug!(
            file = %report.file.display(),
            missing = report.missing.len(),
            extra = report.extra.len(),
            "validated file"
        );
        files.push(report);
    }

    Ok(ValidationReport {
        required: schema.required.clone(),
        files,
    })
}
