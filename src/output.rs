//! Writing the assembled table.
//!
//! Values are written as they are. Nothing is quoted or escaped, so a value
//! containing the delimiter will shift the columns after it; pick a
//! delimiter that cannot occur in the data (a tab, by default).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::entry::Entry;
use crate::error::ConvertError;
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per line, columns joined by the delimiter, header first
    Delimited,
    /// One JSON object per entry, keyed by column name (no header row)
    Jsonl,
}

/// Joins each row's columns with `delimiter`, one row per line.
pub fn write_delimited<W: Write>(mut out: W, rows: &[Entry], delimiter: &str) -> io::Result<()> {
    for row in rows {
        let line = row.values().collect::<Vec<_>>().join(delimiter);
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// One JSON object per line.
pub fn write_jsonl<W: Write>(mut out: W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut out, entry)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Writes `table` to `path` as UTF-8.
pub fn write_table(
    path: &Path,
    table: &Table,
    format: OutputFormat,
    delimiter: &str,
) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let writer = BufWriter::with_capacity(256 * 1024, file);

    let written = match format {
        OutputFormat::Delimited => write_delimited(writer, table.rows(), delimiter),
        OutputFormat::Jsonl => write_jsonl(writer, table.entries()),
    };
    written.map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Field, FIELD_COUNT};

    fn sample() -> Table {
        let mut entry = Entry::default();
        entry.set(Field::DStichwort, "Haus");
        entry.set(Field::DGenus, "n");
        entry.set(Field::RStichwort, "chasa");
        Table::assemble(vec![entry])
    }

    #[test]
    fn delimited_rows_have_every_column() {
        let mut out = Vec::new();
        write_delimited(&mut out, sample().rows(), "\t").unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("DStichwort\tDSemantik\tDSubsemantik"));
        assert_eq!(lines[1], "Haus\t\t\t\tn\tchasa\t\t\t\t\t\t\t\t\t\t\t\t\t");
        for line in lines {
            assert_eq!(line.split('\t').count(), FIELD_COUNT);
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn delimiter_is_passed_through_verbatim() {
        let mut out = Vec::new();
        write_delimited(&mut out, &sample().rows()[1..], ";;").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Haus;;;;;;;;n;;chasa;;"));
    }

    #[test]
    fn jsonl_skips_the_header() {
        let mut out = Vec::new();
        write_jsonl(&mut out, sample().entries()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["DStichwort"], "Haus");
        assert_eq!(value["RStichwort"], "chasa");
        assert_eq!(value["irregular"], "");
    }

    #[test]
    fn writes_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_table(&path, &sample(), OutputFormat::Delimited, "\t").unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
