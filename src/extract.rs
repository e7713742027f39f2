//! Field extraction: one normalized dictionary line in, one [`Entry`] out.
//!
//! A source line carries both headwords plus their annotations in free
//! text, with no fixed columns. Extraction runs an ordered series of
//! strip-and-capture passes over a working copy of the line. Each pass
//! takes the line left by the previous one, fills its columns and returns
//! the line with its own matches cut out, so no pass sees text an earlier
//! pass already claimed:
//!
//! 1. exclusions (`#`, ordinal markers like ` 1.`) are dropped
//! 2. genus markers
//! 3. grammar markers
//! 4. parenthesized glosses
//! 5. abbreviation glosses such as `(zool.)`
//! 6. whatever is left is split into the two headwords
//!
//! The closed vocabularies go first since they are the least ambiguous.

use std::ops::Range;

use regex::Regex;

use crate::entry::{Entry, Field, Side};
use crate::error::ConvertError;
use crate::patterns::{
    claims, marker_pattern, remove_spans, strip_parens, EXCLUDE, GENUS_FOLLOW,
    GLOSS, GRAMMAR_FOLLOW, SPACE, SUB_GLOSS, TRAILING_SPACE, WIDE_GAP,
};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// What went wrong with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// More than two single-space tokens; the target headword took the
    /// whole remainder of the line.
    AmbiguousTarget,
    /// Only one token left, so there is no translation. The entry is dropped.
    MissingTarget,
    /// A column still holds a `cf.` marker awaiting resolution.
    CrossReference,
}

impl Problem {
    pub fn severity(self) -> Severity {
        match self {
            Problem::MissingTarget => Severity::Error,
            Problem::AmbiguousTarget | Problem::CrossReference => Severity::Warning,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Problem::AmbiguousTarget => "ambiguous target headword",
            Problem::MissingTarget => "missing translation",
            Problem::CrossReference => "unresolved cross-reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub problem: Problem,
    pub line: String,
}

/// Result of extracting one line. `entry` is `None` when the line had to
/// be dropped; the diagnostics say why.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub entry: Option<Entry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.problem.severity() == severity)
            .count()
    }
}

/// How the leftover text divided into headwords.
#[derive(Debug, PartialEq, Eq)]
enum Headwords<'a> {
    Pair(&'a str, &'a str),
    /// Source headword plus the verbatim rest of the line.
    Remainder(&'a str, &'a str),
    Lone(&'a str),
}

/// Compiled extraction passes for one marker vocabulary.
#[derive(Debug, Clone)]
pub struct Extractor {
    genus: Regex,
    grammatik: Regex,
}

impl Extractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, ConvertError> {
        vocabulary.validate()?;
        let genus = marker_pattern(&vocabulary.genus, GENUS_FOLLOW)
            .map_err(|source| ConvertError::Pattern { name: "genus", source })?;
        let grammatik = marker_pattern(&vocabulary.grammatik, GRAMMAR_FOLLOW)
            .map_err(|source| ConvertError::Pattern {
                name: "grammatik",
                source,
            })?;
        Ok(Self { genus, grammatik })
    }

    /// Extracts one entry from a normalized line.
    pub fn extract(&self, line: &str) -> Extraction {
        let work = remove_spans(line, &claims(&EXCLUDE, line));
        let (entry, work) = marker_pass(Entry::default(), &work, &self.genus, Side::genus);
        let (entry, work) = marker_pass(entry, &work, &self.grammatik, Side::grammatik);
        let (entry, work) = gloss_pass(entry, &work, &GLOSS, Side::semantik);
        let (mut entry, work) = gloss_pass(entry, &work, &SUB_GLOSS, Side::subsemantik);

        let work = TRAILING_SPACE.replace(&work, "");
        let mut diagnostics = Vec::new();

        match split_headwords(&work) {
            Headwords::Pair(source, target) => {
                entry.set(Field::DStichwort, source);
                entry.set(Field::RStichwort, target);
            }
            Headwords::Remainder(source, rest) => {
                entry.set(Field::DStichwort, source);
                entry.set(Field::RStichwort, rest);
                entry.set(Field::Bearbeitungshinweis, line);
                diagnostics.push(Diagnostic {
                    problem: Problem::AmbiguousTarget,
                    line: line.to_string(),
                });
            }
            Headwords::Lone(_) => {
                diagnostics.push(Diagnostic {
                    problem: Problem::MissingTarget,
                    line: line.to_string(),
                });
                return Extraction {
                    entry: None,
                    diagnostics,
                };
            }
        }

        if entry.has_reference() {
            entry.set(Field::Bearbeitungshinweis, work.to_string());
            diagnostics.push(Diagnostic {
                problem: Problem::CrossReference,
                line: work.into_owned(),
            });
        }

        Extraction {
            entry: Some(entry),
            diagnostics,
        }
    }
}

/// Genus and grammar: two markers split across the languages, a single one
/// is shared by both. Internal spaces are dropped from the captured token.
fn marker_pass(
    mut entry: Entry,
    work: &str,
    re: &Regex,
    column: fn(Side) -> Field,
) -> (Entry, String) {
    let spans = claims(re, work);
    let token = |span: &Range<usize>| work[span.clone()].replace(' ', "");

    match spans.as_slice() {
        [source, target] => {
            entry.set(column(Side::Source), token(source));
            entry.set(column(Side::Target), token(target));
        }
        [shared] => {
            entry.set(column(Side::Source), token(shared));
            entry.set(column(Side::Target), token(shared));
        }
        _ => {}
    }

    (entry, remove_spans(work, &spans))
}

/// Glosses: two matches split across the languages, a single one goes to
/// the side of the line it sits on. Parentheses are dropped from the value.
fn gloss_pass(
    mut entry: Entry,
    work: &str,
    re: &Regex,
    column: fn(Side) -> Field,
) -> (Entry, String) {
    let spans = claims(re, work);

    match spans.as_slice() {
        [source, target] => {
            entry.set(column(Side::Source), strip_parens(&work[source.clone()]));
            entry.set(column(Side::Target), strip_parens(&work[target.clone()]));
        }
        [only] => {
            let text = &work[only.clone()];
            entry.set(column(side_by_midpoint(work, text)), strip_parens(text));
        }
        _ => {}
    }

    (entry, remove_spans(work, &spans))
}

/// Places a lone gloss by where its text first occurs in the working line:
/// strictly past the middle (in characters) means the target language.
///
/// This stands in for language detection and is unreliable on short lines.
/// Converted data depends on it exactly as is.
fn side_by_midpoint(work: &str, text: &str) -> Side {
    let offset = work
        .find(text)
        .map(|byte| work[..byte].chars().count())
        .unwrap_or(0);
    if offset > work.chars().count() / 2 {
        Side::Target
    } else {
        Side::Source
    }
}

/// Headwords are separated by two or more spaces. Failing that, a single
/// space separates exactly two; with more, the target keeps everything
/// after the first token, separator included.
fn split_headwords(line: &str) -> Headwords<'_> {
    let wide: Vec<&str> = WIDE_GAP.split(line).collect();
    if let [source, target, ..] = *wide.as_slice() {
        return Headwords::Pair(source, target);
    }

    let narrow: Vec<&str> = SPACE.split(line).collect();
    match *narrow.as_slice() {
        [source, target] => Headwords::Pair(source, target),
        [source, _, _, ..] => Headwords::Remainder(source, &line[source.len()..]),
        [lone] => Headwords::Lone(lone),
        [] => Headwords::Lone(line),
    }
}
