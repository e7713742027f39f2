use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Document-level failures. Per-line problems never surface here; they are
/// counted and written to the entry's processing note instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to parse vocabulary {}: {source}", .path.display())]
    Vocabulary {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("vocabulary list `{0}` needs at least one token and no empty tokens")]
    EmptyVocabulary(&'static str),

    #[error("invalid {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        source: regex::Error,
    },
}
