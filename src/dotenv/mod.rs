//! `.env` parsing, merging and serialization.
//!
//! This module handles:
//! - Parsing `.env` text into ordered declarations
//! - Folding several files into one mapping, resolving conflicts
//! - Writing the merged mapping back out
//! - Summarizing the merge for the operator

pub mod merge;
pub mod parser;
pub mod report;
pub mod resolver;
mod types;
pub mod writer;

pub use merge::{merge_files, merge_sources, MergeOutcome, Merger};
pub use parser::{load_source, parse_line, parse_pairs, parse_source, Pairs};
pub use report::{render_conflicts, render_summary};
pub use resolver::{
    resolver_for, Choice, ConflictPolicy, ConflictResolver, FailOnConflict, Interactive,
    KeepExisting, Scripted, UseNew,
};
pub use types::{Conflict, KeyValuePair, MergedMapping, SourceFile};
pub use writer::{check_separator, render, write_output, DEFAULT_OUTPUT};
