//! Table assembly: header row plus entries in ordinal headword order.

use std::cmp::Ordering;

use crate::entry::Entry;

/// The final output: a header row followed by the entries sorted by source
/// headword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Entry>,
}

impl Table {
    /// Sorts `entries` by source headword and puts the header row in front.
    ///
    /// The sort is stable and ordinal (UTF-16 code units, no collation), so
    /// `Zebra` sorts before `apfel` and equal headwords keep document order.
    pub fn assemble(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| ordinal_cmp(&a.d_stichwort, &b.d_stichwort));

        let mut rows = Vec::with_capacity(entries.len() + 1);
        rows.push(Entry::header());
        rows.extend(entries);
        Self { rows }
    }

    /// Every row, header first.
    pub fn rows(&self) -> &[Entry] {
        &self.rows
    }

    /// Data rows without the header.
    pub fn entries(&self) -> &[Entry] {
        &self.rows[1..]
    }
}

fn ordinal_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
