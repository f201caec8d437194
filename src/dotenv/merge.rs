//! Sequential merge of parsed `.env` files.

use std::path::Path;

use tracing::{debug, info};

use super::parser::load_source;
use super::resolver::ConflictResolver;
use super::types::{Conflict, KeyValuePair, MergedMapping, SourceFile};
use crate::error::Result;

/// Result of a completed merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Final key/value mapping.
    pub mapping: MergedMapping,
    /// Conflicts in the order they were resolved.
    pub conflicts: Vec<Conflict>,
    /// Number of files folded in.
    pub files: usize,
}

impl MergeOutcome {
    /// Check whether any conflict was resolved.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Owns the merge state while files are folded in.
pub struct Merger<R> {
    resolver: R,
    outcome: MergeOutcome,
}

impl<R: ConflictResolver> Merger<R> {
    /// Start an empty merge.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            outcome: MergeOutcome::default(),
        }
    }

    /// Fold one parsed file into the mapping.
    ///
    /// # Errors
    ///
    /// Returns the resolver's error; the mapping then holds every value
    /// folded before the failing key.
    pub fn fold_source(&mut self, source: &SourceFile) -> Result<()> {
        self.fold_pairs(source.path(), source.pairs().iter().cloned())
    }

    /// Fold declarations attributed to `path`, in order.
    pub fn fold_pairs(
        &mut self,
        path: &Path,
        pairs: impl IntoIterator<Item = KeyValuePair>,
    ) -> Result<()> {
        for pair in pairs {
            let (key, value) = pair.into_parts();
            let existing = match self.outcome.mapping.get(&key) {
                None => {
                    self.outcome.mapping.insert(key, value);
                    continue;
                }
                Some(existing) if existing == value => continue,
                Some(existing) => existing.to_string(),
            };

            let chosen = self.resolver.resolve(&key, &existing, &value)?;
            debug!(key = %key, existing = %existing, incoming = %value, chosen = %chosen, "resolved conflict");

            self.outcome.conflicts.push(Conflict {
                key: key.clone(),
                old_value: existing,
                new_value: value,
                source: path.to_path_buf(),
            });
            self.outcome.mapping.insert(key, chosen);
        }

        self.outcome.files += 1;
        Ok(())
    }

    /// Finish and hand over the merged state.
    pub fn finish(self) -> MergeOutcome {
        self.outcome
    }
}

/// Merge already parsed files in order.
///
/// # Errors
///
/// Returns the first resolver error.
pub fn merge_sources<R: ConflictResolver>(
    sources: &[SourceFile],
    resolver: R,
) -> Result<MergeOutcome> {
    let mut merger = Merger::new(resolver);
    for source in sources {
        merger.fold_source(source)?;
    }
    Ok(merger.finish())
}

/// Read and merge files in argument order.
///
/// Each file is read only after the previous one is fully folded, so a
/// missing file aborts before any later path is touched.
///
/// # Errors
///
/// Returns [`ForgeError::FileNotFound`](crate::error::ForgeError::FileNotFound)
/// for the first missing path, an IO error for unreadable files, or the
/// resolver's error.
pub fn merge_files<P: AsRef<Path>, R: ConflictResolver>(
    paths: &[P],
    resolver: R,
) -> Result<MergeOutcome> {
    let mut merger = Merger::new(resolver);
    for path in paths {
        let source = load_source(path.as_ref())?;
        merger.fold_source(&source)?;
    }

    let outcome = merger.finish();
    info!(
        files = outcome.files,
        keys = outcome.mapping.len(),
        conflicts = outcome.conflicts.len(),
        "merge complete"
    );
    Ok(outcome)
}
