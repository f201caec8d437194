//! Validation of `.env` files against a JSON schema of required keys.

mod check;
mod report;
mod schema;

pub use check::{check_pairs, validate_files, FileReport, ValidationReport};
pub use report::{render_report, render_schema_header};
pub use schema::{Schema, DEFAULT_SCHEMA};
