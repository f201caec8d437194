//! Schema document listing required variables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ForgeError, Result};

/// Default schema file name, resolved against the working directory.
pub const DEFAULT_SCHEMA: &str = "config.schema.json";

/// Schema document: `{ "required": ["KEY", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Variables every validated file must declare with a non-empty value.
    pub required: Vec<String>,
}

impl Schema {
    /// Create a schema from required keys.
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `key` is required.
    pub fn requires(&self, key: &str) -> bool {
        self.required.iter().any(|k| k == key)
    }

    /// Parse a schema from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::InvalidSchema`] on malformed JSON or a missing
    /// `required` list.
    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ForgeError::InvalidSchema {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a schema file.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::FileNotFound`] if the schema does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ForgeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ForgeError::io("read", path, e))?;
        let schema = Self::from_json(path, &content)?;
        debug!(path = %path.display(), required = schema.required.len(), "loaded schema");

        Ok(schema)
    }
}
