//! Typed view of the VLC preferences plist, plus load/save and backup
//! rotation.
//!
//! Only two keys are interpreted: the recently-played list and the
//! resume-position dictionary. Everything else is carried through verbatim
//! and written back untouched. Plist dictionaries are semantically
//! unordered, so the two managed keys may move on rewrite.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plist::{Dictionary, Value};
use tracing::debug;

use crate::error::CleanupError;

/// Key holding the ordered list of recently played file references.
pub const MEDIA_LIST_KEY: &str = "recentlyPlayedMediaList";

/// Key holding the file reference to resume position dictionary.
pub const MEDIA_DICT_KEY: &str = "recentlyPlayedMedia";

/// In-memory preferences document.
///
/// Either managed key may be absent; an absent substructure is simply
/// skipped by the filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `recentlyPlayedMediaList`: ordered, may contain duplicate values.
    pub media_list: Option<Vec<String>>,
    /// `recentlyPlayedMedia`: reference -> opaque resume position.
    pub positions: Option<Dictionary>,
    /// All other keys, preserved verbatim.
    rest: Dictionary,
}

impl Document {
    /// Builds a document from a parsed plist value.
    ///
    /// The root must be a dictionary and every media-list entry must be a
    /// string; anything else is a format error.
    pub fn from_value(value: Value) -> Result<Self, CleanupError> {
        let mut rest = value
            .into_dictionary()
            .ok_or(CleanupError::NotADictionary)?;

        let media_list = match rest.remove(MEDIA_LIST_KEY) {
            Some(Value::Array(items)) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(name) => names.push(name),
                        _ => {
                            return Err(CleanupError::NonStringEntry {
                                key: MEDIA_LIST_KEY,
                            })
                        }
                    }
                }
                Some(names)
            }
            Some(_) => {
                return Err(CleanupError::UnexpectedType {
                    key: MEDIA_LIST_KEY,
                })
            }
            None => None,
        };

        let positions = match rest.remove(MEDIA_DICT_KEY) {
            Some(Value::Dictionary(dict)) => Some(dict),
            Some(_) => {
                return Err(CleanupError::UnexpectedType {
                    key: MEDIA_DICT_KEY,
                })
            }
            None => None,
        };

        Ok(Self {
            media_list,
            positions,
            rest,
        })
    }

    /// Reassembles the full plist value, managed keys included.
    pub fn to_value(&self) -> Value {
        let mut dict = self.rest.clone();
        if let Some(names) = &self.media_list {
            let items = names.iter().map(|name| Value::from(name.as_str())).collect();
            dict.insert(MEDIA_LIST_KEY.to_string(), Value::Array(items));
        }
        if let Some(positions) = &self.positions {
            dict.insert(
                MEDIA_DICT_KEY.to_string(),
                Value::Dictionary(positions.clone()),
            );
        }
        Value::Dictionary(dict)
    }

    /// Reads and parses the plist at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let value = Value::from_file(path)
            .with_context(|| format!("Failed to read plist: {}", path.display()))?;
        let document = Self::from_value(value)
            .with_context(|| format!("Malformed preferences file: {}", path.display()))?;
        debug!(
            list_entries = document.media_list.as_ref().map_or(0, Vec::len),
            position_entries = document.positions.as_ref().map_or(0, Dictionary::len),
            "loaded preferences"
        );
        Ok(document)
    }

    /// Serializes the document in binary plist form to `path`.
    ///
    /// No temp-file-then-rename here; the pre-mutation version has already
    /// been moved aside by [`rotate_backup`], so a failed write leaves the
    /// backup as the only intact copy.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_value()
            .to_file_binary(path)
            .with_context(|| format!("Failed to write plist: {}", path.display()))
    }

}

/// Backup location for the given preferences path: `<path>.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Rotates the single-generation backup.
///
/// Deletes a stale `<path>.bak` if present, then renames the current file
/// to it. Only the most recent pre-mutation version is retained.
pub fn rotate_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    if backup.is_file() {
        fs::remove_file(&backup)
            .with_context(|| format!("Failed to remove old backup: {}", backup.display()))?;
    }
    if path.is_file() {
        fs::rename(path, &backup).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                path.display(),
                backup.display()
            )
        })?;
        debug!(backup = %backup.display(), "rotated backup");
    }
    Ok(backup)
}
