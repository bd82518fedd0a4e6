//! Domain errors for the cleanup pipeline.

use thiserror::Error;

/// Errors that can occur before or during a cleanup run.
///
/// I/O and plist parse failures are propagated through `anyhow` with path
/// context attached; this enum covers the failures the tool itself defines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CleanupError {
    #[error("No cleanup options specified, nothing to do")]
    NoCriteria,

    #[error("The default VLC preferences location is only known on macOS; use --file elsewhere")]
    UnsupportedPlatform,

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Preferences root is not a dictionary")]
    NotADictionary,

    #[error("'{key}' has an unexpected type")]
    UnexpectedType { key: &'static str },

    #[error("'{key}' contains a non-string entry")]
    NonStringEntry { key: &'static str },
}
