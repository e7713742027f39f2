//! The batch conversion: normalize and extract every line, resolve
//! cross-references over the full set, then assemble the sorted table.

use indicatif::ProgressBar;
use tracing::{debug, info, trace};

use crate::entry::Entry;
use crate::error::ConvertError;
use crate::extract::{Extractor, Severity};
use crate::normalize::normalize_line;
use crate::resolve::resolve_references;
use crate::table::Table;
use crate::vocabulary::Vocabulary;

/// Counts gathered over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines_read: usize,
    pub entries_extracted: usize,
    pub warnings: usize,
    pub errors: usize,
    pub references_resolved: usize,
    pub references_dropped: usize,
    pub residue_dropped: usize,
    pub rows_written: usize,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub table: Table,
    pub report: Report,
}

pub struct Converter {
    extractor: Extractor,
}

impl Converter {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ConvertError> {
        Ok(Self {
            extractor: Extractor::new(vocabulary)?,
        })
    }

    /// Converts a whole document. Per-line problems are counted in the
    /// report and never stop the run. `progress` advances once per line.
    pub fn convert<S: AsRef<str>>(&self, lines: &[S], progress: &ProgressBar) -> Conversion {
        let mut report = Report {
            lines_read: lines.len(),
            ..Report::default()
        };
        let mut entries: Vec<Entry> = Vec::with_capacity(lines.len());

        for raw in lines {
            let line = normalize_line(raw.as_ref());
            let extraction = self.extractor.extract(&line);

            for diagnostic in &extraction.diagnostics {
                match diagnostic.problem.severity() {
                    Severity::Warning => report.warnings += 1,
                    Severity::Error => report.errors += 1,
                }
                debug!(
                    problem = diagnostic.problem.describe(),
                    line = %diagnostic.line,
                    "{:?}",
                    diagnostic.problem.severity()
                );
            }

            if let Some(entry) = extraction.entry {
                trace!(headword = %entry.d_stichwort, target = %entry.r_stichwort, "extracted");
                entries.push(entry);
            }
            progress.inc(1);
        }
        report.entries_extracted = entries.len();

        info!(entries = entries.len(), "entries before computing references");
        let resolution = resolve_references(&mut entries);
        info!(entries = entries.len(), "entries after computing references");
        report.references_resolved = resolution.resolved;
        report.references_dropped = resolution.unresolved;
        report.residue_dropped = resolution.residue;

        let table = Table::assemble(entries);
        report.rows_written = table.rows().len();
        info!(
            errors = report.errors,
            warnings = report.warnings,
            "finished parsing"
        );

        Conversion { table, report }
    }
}

/// Converts `lines` with the built-in vocabulary and no progress display.
pub fn convert_lines<S: AsRef<str>>(lines: &[S]) -> Result<Conversion, ConvertError> {
    let converter = Converter::new(&Vocabulary::default())?;
    Ok(converter.convert(lines, &ProgressBar::hidden()))
}
