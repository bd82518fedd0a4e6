//! vlc-recent-cleanup - remove files from VLC's recently played list.
//!
//! VLC on macOS keeps its recently-played history in the binary plist at
//! `~/Library/Preferences/org.videolan.vlc.plist`, split across two keys:
//! an ordered list of file references and a dictionary mapping references
//! to resume positions. This crate filters both structures by extension
//! and/or directory, keeps a single-generation `.bak` of the previous
//! file, and writes the result back in binary form.
//!
//! Only `file://` references are ever eligible for removal; stream URLs
//! and other scheme-less entries are retained regardless of configuration.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod report;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

pub use config::CleanupConfig;
pub use document::Document;
pub use error::CleanupError;

use matcher::{DirectoryMatcher, ExtensionMatcher};

/// Default VLC preferences location.
///
/// Only known on macOS; other platforms must pass an explicit path.
pub fn default_plist_path() -> Result<PathBuf, CleanupError> {
    if !cfg!(target_os = "macos") {
        return Err(CleanupError::UnsupportedPlatform);
    }
    let home = dirs::home_dir().ok_or(CleanupError::HomeDirUnavailable)?;
    Ok(home.join("Library/Preferences/org.videolan.vlc.plist"))
}

/// Runs the full cleanup pipeline against the plist at `path`.
///
/// Load, extension pass, directory pass, backup rotation, write-back.
/// Returns the set of removed references for reporting. Any failure is
/// fatal; there is no retry or partial-state recovery.
pub fn run(config: &CleanupConfig, path: &Path) -> Result<BTreeSet<String>> {
    let mut document = Document::load(path)?;
    let mut removed = BTreeSet::new();

    if !config.drop_exts.is_empty() {
        info!(extensions = ?config.drop_exts, "removing items by extension");
        let matcher = ExtensionMatcher::new(&config.drop_exts);
        filter::apply(&mut document, |name| matcher.matches(name), &mut removed);
    }

    if !config.drop_dirs.is_empty() {
        info!(dirs = ?config.drop_dirs, "removing items under directories");
        let home = dirs::home_dir().ok_or(CleanupError::HomeDirUnavailable)?;
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        let matcher = DirectoryMatcher::new(&config.drop_dirs, &home, &cwd);
        filter::apply(&mut document, |name| matcher.matches(name), &mut removed);
    }

    document::rotate_backup(path)?;
    document.save(path)?;

    info!(removed = removed.len(), "cleanup complete");
    Ok(removed)
}
