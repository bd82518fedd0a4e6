//! Drop-and-record pass over the document's two substructures.

use std::collections::BTreeSet;

use tracing::debug;

use crate::document::Document;

/// Removes every reference matched by `should_drop` from both the
/// recently-played list and the resume-position dictionary, recording each
/// dropped reference in `removed`.
///
/// The list may contain duplicates; all occurrences of a matching value are
/// removed while the order of survivors is preserved. The dictionary loses
/// exactly the keys that matched. Absent substructures are skipped. The
/// removal set accumulates across calls, so a reference matched by several
/// passes is recorded once.
pub fn apply<F>(document: &mut Document, should_drop: F, removed: &mut BTreeSet<String>)
where
    F: Fn(&str) -> bool,
{
    let before = removed.len();

    if let Some(names) = document.media_list.as_mut() {
        names.retain(|name| {
            if should_drop(name) {
                removed.insert(name.clone());
                false
            } else {
                true
            }
        });
    }

    if let Some(positions) = document.positions.as_mut() {
        let doomed: Vec<String> = positions
            .keys()
            .filter(|key| should_drop(key.as_str()))
            .cloned()
            .collect();
        for key in doomed {
            positions.remove(&key);
            removed.insert(key);
        }
    }

    debug!(dropped = removed.len() - before, "filter pass complete");
}
