//! configforge - merge, validate, encrypt and decrypt `.env` files
//!
//! The core is a merge engine that folds several `.env` files into one
//! mapping in argument order. When a key is re-declared with a different
//! value, a pluggable [`ConflictResolver`](dotenv::ConflictResolver) picks
//! the survivor: the operator at a prompt, or a fixed policy.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`commands`] - Subcommand flows
//! - [`config`] - Configuration file loading and types
//! - [`crypto`] - Passphrase envelope encryption
//! - [`dotenv`] - Parsing, merging and writing `.env` files
//! - [`error`] - Error types and exit codes
//! - [`logging`] - Diagnostic logging setup
//! - [`prompt`] - Operator prompts
//! - [`ui`] - Colored output, frames and tables
//! - [`validate`] - Schema validation
//!
//! # Example
//!
//! ```
//! use configforge::dotenv::{merge_sources, parse_source, render, UseNew};
//! use std::path::Path;
//!
//! let a = parse_source(Path::new("A.env"), "PORT=3000\nHOST=localhost\n");
//! let b = parse_source(Path::new("B.env"), "PORT=4000\nDEBUG=true\n");
//!
//! let outcome = merge_sources(&[a, b], UseNew).unwrap();
//! assert_eq!(outcome.conflicts.len(), 1);
//! assert_eq!(
//!     render(&outcome.mapping, None),
//!     "PORT=4000\nHOST=localhost\nDEBUG=true\n"
//! );
//! ```

/// CLI argument definitions.
pub mod cli;

/// Subcommand implementations.
pub mod commands;

/// Configuration system for loading and merging settings.
pub mod config;

/// Envelope encryption of files.
pub mod crypto;

/// `.env` parsing, merging and serialization.
pub mod dotenv;

/// Error types and result helpers.
pub mod error;

/// Diagnostic logging.
pub mod logging;

/// Operator prompts.
pub mod prompt;

/// Terminal output helpers.
pub mod ui;

/// Path utilities.
pub mod utils;

/// Schema validation.
pub mod validate;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use dotenv::{ConflictPolicy, ConflictResolver, MergeOutcome, MergedMapping};
pub use error::{ForgeError, Result};
