//! Reading the dictionary source.
//!
//! The whole document is read and decoded up front. Files ending in `.bz2`
//! are decompressed on the fly. A byte-order mark decides the encoding when
//! present, otherwise it is guessed from the content.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use bzip2::read::BzDecoder;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::error::ConvertError;

/// A decoded source document, split into raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub lines: Vec<String>,
    /// Name of the encoding the bytes were decoded from.
    pub encoding: &'static str,
}

impl SourceDocument {
    pub fn read(path: &Path, nfc: bool) -> Result<Self, ConvertError> {
        let bytes = read_bytes(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::decode(&bytes, nfc))
    }

    /// Decodes raw bytes. With `nfc`, the text is composed to NFC first so
    /// that decomposed umlauts still count as single letters.
    pub fn decode(bytes: &[u8], nfc: bool) -> Self {
        let (text, encoding) = decode_text(bytes);
        let text = if nfc { text.nfc().collect() } else { text };
        debug!(encoding = encoding.name(), bytes = bytes.len(), "decoded source");

        Self {
            lines: split_lines(&text),
            encoding: encoding.name(),
        }
    }
}

fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut reader: Box<dyn Read> = if path.to_string_lossy().ends_with(".bz2") {
        Box::new(BufReader::with_capacity(256 * 1024, BzDecoder::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn decode_text(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            warn!(encoding = encoding.name(), "source contains malformed sequences");
        }
        return (text.into_owned(), encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guess = detector.guess(None, true);

    let (text, encoding, had_errors) = guess.decode(bytes);
    if had_errors {
        warn!(encoding = encoding.name(), "source contains malformed sequences");
    }
    (text.into_owned(), encoding)
}

// Newline-separated; trailing empty lines carry nothing and are dropped,
// blank lines in between are kept so they are counted like any other line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_on_newline_and_keeps_carriage_returns() {
        let doc = SourceDocument::decode(b"Haus  chasa\r\n\r\nTisch  maisa\r\n\n\n", false);
        assert_eq!(doc.lines, vec!["Haus  chasa\r", "\r", "Tisch  maisa\r"]);
    }

    #[test]
    fn utf8_bom_is_honored_and_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("Löwe  liun".as_bytes());
        let doc = SourceDocument::decode(&bytes, false);
        assert_eq!(doc.encoding, "UTF-8");
        assert_eq!(doc.lines, vec!["Löwe  liun"]);
    }

    #[test]
    fn utf16_bom_selects_utf16() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "Bär  urs\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let doc = SourceDocument::decode(&bytes, false);
        assert_eq!(doc.encoding, "UTF-16LE");
        assert_eq!(doc.lines, vec!["Bär  urs"]);
    }

    #[test]
    fn nfc_composes_decomposed_letters() {
        let decomposed = "Lo\u{0308}we  liun";
        let doc = SourceDocument::decode(decomposed.as_bytes(), true);
        assert_eq!(doc.lines, vec!["Löwe  liun"]);
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert!(SourceDocument::decode(b"", false).lines.is_empty());
    }

    #[test]
    fn reads_bzip2_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.txt.bz2");
        let file = File::create(&path).unwrap();
        let mut encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::default());
        encoder.write_all(b"Haus  chasa\nTisch  maisa\n").unwrap();
        encoder.finish().unwrap();

        let doc = SourceDocument::read(&path, false).unwrap();
        assert_eq!(doc.lines, vec!["Haus  chasa", "Tisch  maisa"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SourceDocument::read(Path::new("/nonexistent/dict.txt"), false).unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
    }
}
