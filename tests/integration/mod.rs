//! Integration tests for configforge.
//!
//! Organized by feature:
//!
//! - `fixtures` - Scratch projects and an isolated binary runner
//! - `cli_tests` - Help, version, completions and argument errors
//! - `merge_tests` - The merge command end to end
//! - `validate_tests` - Schema validation
//! - `crypto_tests` - Encryption and decryption
//! - `config_tests` - Configuration layering
//! - `snapshot_tests` - Output snapshots using insta

pub mod cli_tests;
pub mod config_tests;
pub mod crypto_tests;
pub mod fixtures;
pub mod merge_tests;
