//! Custom error types for configforge.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Exit codes for configforge.
pub mod exit_code {
    /// Success. Also used when the operator cancels an overwrite.
    pub const SUCCESS: i32 = 0;
    /// General error (I/O, prompt, crypto).
    pub const GENERAL_ERROR: i32 = 1;
    /// An input, schema or config path does not exist.
    pub const FILE_NOT_FOUND: i32 = 2;
    /// One or more files are missing required variables.
    pub const VALIDATION_FAILED: i32 = 3;
    /// A conflict was rejected by the `fail` policy.
    pub const UNRESOLVED_CONFLICT: i32 = 4;
    /// Invalid configuration, schema or separator.
    pub const INVALID_CONFIG: i32 = 5;
    /// Interrupted (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for configforge.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Input file does not exist.
    #[error("File not found: {path}\n\nTip: Double check the path, it is resolved against the current directory.")]
    FileNotFound { path: PathBuf },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The operator declined to continue.
    #[error("{operation} cancelled by user.")]
    Cancelled { operation: String },

    /// The interactive prompt could not be answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// A conflict was encountered while the `fail` policy was active.
    #[error("Conflict for \"{key}\": existing value \"{existing}\" differs from \"{incoming}\"\n\nTip: Use --on-conflict keep-existing|use-new|prompt to resolve conflicts.")]
    UnresolvedConflict {
        key: String,
        existing: String,
        incoming: String,
    },

    /// The separator would be read back as a variable.
    #[error("Invalid separator '{separator}': it would be parsed as a variable declaration\n\nTip: Use a separator without '=' or start it with '#'.")]
    InvalidSeparator { separator: String },

    /// Schema file is not a valid schema document.
    #[error("Invalid schema at {path}:\n  {message}\n\nTip: The schema must look like {{ \"required\": [\"KEY\", ...] }}.")]
    InvalidSchema { path: PathBuf, message: String },

    /// Files are missing required variables.
    #[error("Validation failed: {files} file(s) are missing required variables")]
    ValidationFailed { files: usize },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// Encrypted file does not follow the `IV:`/`DATA:` layout.
    #[error("Invalid encrypted file format: {path}")]
    InvalidEnvelope { path: PathBuf },

    /// Encryption failed.
    #[error("Encryption failed: {message}")]
    Encryption { message: String },

    /// Decryption failed (wrong key or corrupted data).
    #[error("Decryption failed: {message}")]
    Decryption { message: String },

    /// Some files of a batch failed.
    #[error("{failed} of {total} file(s) could not be {operation}")]
    PartialFailure {
        operation: String,
        failed: usize,
        total: usize,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ForgeError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::FileNotFound { .. } => exit_code::FILE_NOT_FOUND,
            ForgeError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            ForgeError::Cancelled { .. } => exit_code::SUCCESS,
            ForgeError::Prompt { .. } => exit_code::GENERAL_ERROR,
            ForgeError::UnresolvedConflict { .. } => exit_code::UNRESOLVED_CONFLICT,
            ForgeError::InvalidSeparator { .. } => exit_code::INVALID_CONFIG,
            ForgeError::InvalidSchema { .. } => exit_code::INVALID_CONFIG,
            ForgeError::ValidationFailed { .. } => exit_code::VALIDATION_FAILED,
            ForgeError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            ForgeError::InvalidEnvelope { .. } => exit_code::GENERAL_ERROR,
            ForgeError::Encryption { .. } => exit_code::GENERAL_ERROR,
            ForgeError::Decryption { .. } => exit_code::GENERAL_ERROR,
            ForgeError::PartialFailure { .. } => exit_code::GENERAL_ERROR,
            ForgeError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Whether this error is a clean, operator-initiated stop.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ForgeError::Cancelled { .. })
    }

    /// Build an [`ForgeError::IoWithContext`] for a failed file operation.
    ///
    /// A `NotFound` source on a read is turned into
    /// [`ForgeError::FileNotFound`]. Failed writes always keep their context.
    pub fn io(operation: &str, path: &Path, source: std::io::Error) -> Self {
        if operation == "read" && source.kind() == std::io::ErrorKind::NotFound {
            return ForgeError::FileNotFound {
                path: path.to_path_buf(),
            };
        }
        ForgeError::IoWithContext {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for configforge operations.
pub type Result<T> = std::result::Result<T, ForgeError>;
