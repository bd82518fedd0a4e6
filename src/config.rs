//! Validated cleanup criteria.

use std::collections::BTreeSet;

use crate::error::CleanupError;

/// Criteria for a cleanup run.
///
/// Construction fails when no criteria are given at all, so a config in
/// hand always describes work to do.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Extensions to drop, as given (lower-casing happens in the matcher).
    pub drop_exts: BTreeSet<String>,
    /// Directories to drop, as given (`~` expansion happens in the matcher).
    pub drop_dirs: BTreeSet<String>,
    /// Print the removed-items summary after the rewrite.
    pub verbose: bool,
}

impl CleanupConfig {
    pub fn new(
        drop_exts: impl IntoIterator<Item = String>,
        drop_dirs: impl IntoIterator<Item = String>,
        verbose: bool,
    ) -> Result<Self, CleanupError> {
        let config = Self {
            drop_exts: drop_exts.into_iter().collect(),
            drop_dirs: drop_dirs.into_iter().collect(),
            verbose,
        };
        if config.drop_exts.is_empty() && config.drop_dirs.is_empty() {
            return Err(CleanupError::NoCriteria);
        }
        Ok(config)
    }
}
