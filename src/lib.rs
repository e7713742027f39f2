//! Converts the Sutsilvan bilingual dictionary source, a flat file of
//! free-text lines, into a fixed 19-column table.
//!
//! Each source line mixes a German and a Romansh headword with genus and
//! grammar markers, glosses and `cf.` cross-references, with no fixed
//! column positions. [`Extractor`] recovers the columns one line at a time,
//! [`resolve_references`] turns `cf.` entries into full copies of the entry
//! they point to, and [`Table`] sorts the result behind a header row.
//!
//! # Example
//! ```no_run
//! use sutsilvan_converter::{convert_lines, write_delimited};
//!
//! # fn main() -> anyhow::Result<()> {
//! let conversion = convert_lines(&["Haus n  chasa f ", "Umleitung  cf. Haus"])?;
//! write_delimited(std::io::stdout(), conversion.table.rows(), "\t")?;
//! # Ok(()) }
//! ```

pub mod convert;
pub mod entry;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod output;
pub mod patterns;
pub mod resolve;
pub mod source;
pub mod table;
pub mod vocabulary;

pub use convert::{convert_lines, Conversion, Converter, Report};
pub use entry::{Entry, Field, Side, FIELD_COUNT, REFERENCE_MARKER, SIDE_WIDTH};
pub use error::ConvertError;
pub use extract::{Diagnostic, Extraction, Extractor, Problem, Severity};
pub use normalize::normalize_line;
pub use output::{write_delimited, write_jsonl, write_table, OutputFormat};
pub use resolve::{resolve_references, Resolution};
pub use source::SourceDocument;
pub use table::Table;
pub use vocabulary::Vocabulary;
