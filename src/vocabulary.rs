//! Closed marker vocabularies for the genus and grammar passes.
//!
//! The built-in lists cover the Sutsilvan source. A YAML file with the same
//! two keys replaces them (see `schema/vocabulary.yaml`). Order matters:
//! tokens are tried first to last at each position.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConvertError;

const DEFAULT_GENUS: &[&str] = &[
    "n.m", "n.f", "m/f", "f/m", "m(f)", "m.pl", "f.pl", "m,f", "f,m", "f", "m", "n", "pl",
];

const DEFAULT_GRAMMATIK: &[&str] = &[
    "tr",
    "adj",
    "adv",
    "refl",
    "int",
    "tr/int",
    "abs/tr",
    "c/j",
    "interj",
    "(refl) int",
    "n.l",
    "num",
    "prep",
    "cj",
    "subst",
    "adv/prep",
    "pron",
    "pron.adj",
    "pron/adj",
    "pron.indef",
    "pron/indef",
    "adj/cj",
    "n.p",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vocabulary {
    /// Grammatical gender markers (`f`, `m.pl`, `m(f)`, ...).
    pub genus: Vec<String>,
    /// Part-of-speech and role markers (`tr`, `adv`, `(refl) int`, ...).
    pub grammatik: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            genus: DEFAULT_GENUS.iter().map(|t| t.to_string()).collect(),
            grammatik: DEFAULT_GRAMMATIK.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let contents = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary: Vocabulary =
            serde_yaml::from_str(&contents).map_err(|source| ConvertError::Vocabulary {
                path: path.to_path_buf(),
                source,
            })?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        check_list("genus", &self.genus)?;
        check_list("grammatik", &self.grammatik)
    }
}

fn check_list(name: &'static str, tokens: &[String]) -> Result<(), ConvertError> {
    if tokens.is_empty() || tokens.iter().any(|t| t.trim().is_empty()) {
        return Err(ConvertError::EmptyVocabulary(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.validate().is_ok());
        assert_eq!(vocabulary.genus.first().map(String::as_str), Some("n.m"));
        assert!(vocabulary.grammatik.iter().any(|t| t == "(refl) int"));
    }

    #[test]
    fn shipped_schema_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("schema/vocabulary.yaml");
        assert_eq!(Vocabulary::load(&path).unwrap(), Vocabulary::default());
    }

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "genus: [f, m]\ngrammatik:\n  - adj\n  - adv").unwrap();
        let vocabulary = Vocabulary::load(file.path()).unwrap();
        assert_eq!(vocabulary.genus, vec!["f", "m"]);
        assert_eq!(vocabulary.grammatik, vec!["adj", "adv"]);
    }

    #[test]
    fn rejects_empty_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "genus: []\ngrammatik: [adj]").unwrap();
        let err = Vocabulary::load(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyVocabulary("genus")));
    }

    #[test]
    fn reports_malformed_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "genus: f").unwrap();
        let err = Vocabulary::load(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::Vocabulary { .. }));
    }
}
