//! Predicates deciding which file references to drop.
//!
//! Both matchers only ever apply to references carrying the `file://`
//! scheme; anything else (stream URLs and the like) is retained regardless
//! of configuration. The home directory is injected at construction so the
//! matchers stay pure and testable.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Scheme prefix identifying a path-based media reference.
pub const FILE_SCHEME: &str = "file://";

/// Matches references whose file extension is in a configured set.
///
/// Comparison is case-insensitive on both the configured extensions and the
/// reference. Extensions are stored without a leading dot.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    extensions: BTreeSet<String>,
}

impl ExtensionMatcher {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the reference is a `file://` URI whose extension is
    /// one of the configured extensions. References without an extension
    /// never match.
    pub fn matches(&self, reference: &str) -> bool {
        let Some(path) = reference.strip_prefix(FILE_SCHEME) else {
            return false;
        };
        match extension_of(path) {
            Some(ext) => self.extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }
}

/// Extracts the extension of the final path segment.
///
/// Leading dots of the basename are not extension separators, so `.hidden`
/// and `..mp3` have no extension. Returns `None` for an empty extension
/// (`"movie."`).
fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let stripped = name.trim_start_matches('.');
    let dot = stripped.rfind('.')?;
    let ext = &stripped[dot + 1..];
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Matches references whose path lies under one of a set of directories.
///
/// Each configured directory is normalized once at construction: `~` is
/// expanded to the injected home directory, relative paths are resolved
/// against the injected working directory, the result is lower-cased and
/// terminated with exactly one `/`. The trailing separator keeps `tmp`
/// from matching `tmpfoo`.
#[derive(Debug, Clone)]
pub struct DirectoryMatcher {
    prefixes: Vec<String>,
}

impl DirectoryMatcher {
    pub fn new<I, S>(dirs: I, home: &Path, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: dirs
                .into_iter()
                .map(|dir| normalize_dir(dir.as_ref(), home, cwd))
                .collect(),
        }
    }

    /// Returns true if the reference is a `file://` URI whose path starts
    /// with any of the normalized directory prefixes.
    pub fn matches(&self, reference: &str) -> bool {
        let Some(path) = reference.strip_prefix(FILE_SCHEME) else {
            return false;
        };
        let path = path.to_lowercase();
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }
}

fn normalize_dir(dir: &str, home: &Path, cwd: &Path) -> String {
    let expanded = if dir == "~" {
        home.to_path_buf()
    } else if let Some(rest) = dir.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(dir)
    };
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };

    let mut prefix = absolute.to_string_lossy().to_lowercase();
    while prefix.ends_with('/') {
        prefix.pop();
    }
    prefix.push('/');
    prefix
}
