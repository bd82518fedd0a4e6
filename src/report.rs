//! Verbose summary of removed items.

use std::collections::BTreeSet;
use std::io::{self, Write};

/// Writes the removed-items report.
///
/// References come out of the `BTreeSet` already sorted lexicographically,
/// one per line under a header; an empty set gets a distinct message.
pub fn write_summary<W: Write>(out: &mut W, removed: &BTreeSet<String>) -> io::Result<()> {
    if removed.is_empty() {
        writeln!(out, "no items removed.")
    } else {
        writeln!(out, "removed items:")?;
        for name in removed {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}
