//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

/// Remove files from VLC's recently played list.
#[derive(Debug, Parser)]
#[command(
    name = "vlc-recent-cleanup",
    version,
    about = "Remove files from VLC's recently played list",
    after_help = "At least one of --drop-ext / --drop-dir is required."
)]
pub struct Cli {
    /// Remove files with this extension, without the leading dot
    /// (repeatable, case-insensitive)
    #[arg(long = "drop-ext", value_name = "EXT")]
    pub drop_exts: Vec<String>,

    /// Remove files under this directory, e.g. "~/tmp" (repeatable)
    #[arg(long = "drop-dir", value_name = "DIR")]
    pub drop_dirs: Vec<String>,

    /// Print removed items
    #[arg(short, long)]
    pub verbose: bool,

    /// Operate on this plist instead of the default VLC preferences file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
