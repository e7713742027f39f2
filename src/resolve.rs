//! Cross-reference resolution.
//!
//! An entry whose headword reads `cf. X` has no translation of its own: it
//! borrows the block of whichever entry's opposite headword starts with `X`.
//! Resolution runs in document order over the live list, so a reference may
//! pick up a target that an earlier step already rewrote. References with no
//! target are dropped. A final sweep removes anything still carrying a
//! marker, which catches self-references and chains that copied a marker in.

use tracing::debug;

use crate::entry::{Entry, Field, Side, REFERENCE_MARKER};
use crate::patterns::REFERENCE_GAP;

/// Counts from one resolution run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: usize,
    pub unresolved: usize,
    pub residue: usize,
}

/// Resolves every cross-reference in `entries` in place.
pub fn resolve_references(entries: &mut Vec<Entry>) -> Resolution {
    let mut resolution = Resolution::default();
    let mut i = 0;

    while i < entries.len() {
        let Some(side) = reference_side(&entries[i]) else {
            i += 1;
            continue;
        };

        let query = reference_query(entries[i].get(side.headword()));
        match find_target(entries, &query, side.opposite()) {
            Some(target) => {
                let target = entries[target].clone();
                let entry = &mut entries[i];
                entry.copy_side_from(side, &target);
                entry.set(Field::Bearbeitungshinweis, "");
                resolution.resolved += 1;
                i += 1;
            }
            None => {
                debug!(
                    reference = %entries[i].get(side.headword()),
                    "dropping unresolved reference"
                );
                entries.remove(i);
                resolution.unresolved += 1;
            }
        }
    }

    let before = entries.len();
    entries.retain(|entry| !entry.has_reference());
    resolution.residue = before - entries.len();
    resolution
}

/// The side whose headword holds a reference; the source side wins.
fn reference_side(entry: &Entry) -> Option<Side> {
    [Side::Source, Side::Target]
        .into_iter()
        .find(|side| entry.get(side.headword()).contains(REFERENCE_MARKER))
}

/// Text after the first marker, with the space after each marker removed.
fn reference_query(headword: &str) -> String {
    let collapsed = REFERENCE_GAP.replace_all(headword, REFERENCE_MARKER);
    collapsed
        .find(REFERENCE_MARKER)
        .map(|at| collapsed[at + REFERENCE_MARKER.len()..].to_string())
        .unwrap_or_default()
}

/// First entry, in current order, whose `side` headword starts with `query`.
fn find_target(entries: &[Entry], query: &str, side: Side) -> Option<usize> {
    entries
        .iter()
        .position(|entry| entry.get(side.headword()).starts_with(query))
}
