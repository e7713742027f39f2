//! Extraction patterns and the scanning helpers that drive them.
//!
//! The `regex` crate has no lookaround, so each pattern here consumes its
//! boundary context as ordinary text and marks the span it actually claims
//! with its first participating capture group. [`claims`] resumes scanning
//! at the end of each claimed span, which leaves a boundary character free
//! to serve the next match as well.
//!
//! Whitespace is the ASCII set (`[[:space:]]`) throughout: the source files
//! only use ASCII separators, and no-break spaces inside a headword must not
//! split it.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "#" anywhere; ordinal markers " 1.", " 2." before whitespace or end of line
    pub static ref EXCLUDE: Regex =
        Regex::new(r"(#)|([[:space:]][0-9]\.)(?:[[:space:]]|$)").unwrap();

    // (Zauberkünstler), (entstellen) after whitespace or a period, or the last
    // word inside a parenthesis: "(Magie.Hexerei)" claims "Hexerei"
    pub static ref GLOSS: Regex = Regex::new(
        r"[[:space:].](?:(\([\p{L}[:space:]]+\))(?:[[:space:]]|$)|(\p{L}+)\)(?:[[:space:]]|$))"
    )
    .unwrap();

    // (zool.), (econ. polit.)
    pub static ref SUB_GLOSS: Regex =
        Regex::new(r"(\([\p{L}[:space:].]*\.[\p{L}[:space:].]*\))(?:[[:space:]]|$)").unwrap();

    pub static ref TRAILING_SPACE: Regex = Regex::new(r"[[:space:]]+$").unwrap();
    pub static ref WIDE_GAP: Regex = Regex::new(r"[[:space:]]{2,}").unwrap();
    pub static ref SPACE: Regex = Regex::new(r"[[:space:]]").unwrap();

    // "cf. Weiter" and "cf.Weiter" name the same target
    pub static ref REFERENCE_GAP: Regex = Regex::new(r"cf\.[[:space:]]").unwrap();
}

/// Lookahead accepted after a genus marker: whitespace or a period (`f.col`).
pub const GENUS_FOLLOW: &str = r"(?:[[:space:]]|\.)";

/// Lookahead accepted after a grammar marker.
pub const GRAMMAR_FOLLOW: &str = r"[[:space:]]";

/// Builds a closed-vocabulary marker pattern: whitespace, one of `tokens`,
/// then `follow`.
///
/// Tokens are tried in the order given, so a shorter token listed before a
/// longer one sharing its prefix (`tr` before `tr/int`) still lets the
/// longer one match when the shorter fails its lookahead. A space inside a
/// token matches any single whitespace character.
pub fn marker_pattern(tokens: &[String], follow: &str) -> Result<Regex, regex::Error> {
    let alternation = tokens
        .iter()
        .map(|token| regex::escape(token).replace(' ', "[[:space:]]"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"([[:space:]](?:{alternation})){follow}"))
}

/// All non-overlapping claimed spans of `re` in `text`, left to right.
pub fn claims(re: &Regex, text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(claim) = caps.iter().skip(1).flatten().next() else {
            break;
        };
        // Claims are never empty, so this always moves forward.
        pos = claim.end().max(pos + 1);
        spans.push(claim.range());
    }

    spans
}

/// `text` with the given (sorted, disjoint) spans cut out.
pub fn remove_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Drops every parenthesis character.
pub fn strip_parens(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claimed<'a>(re: &Regex, text: &'a str) -> Vec<&'a str> {
        claims(re, text).into_iter().map(|r| &text[r]).collect()
    }

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn exclusions_need_a_following_boundary() {
        assert_eq!(claimed(&EXCLUDE, "Bank 1.  banca"), vec![" 1."]);
        assert_eq!(claimed(&EXCLUDE, "#Bank 1. 2."), vec!["#", " 1.", " 2."]);
        assert!(claimed(&EXCLUDE, "Version 1.5").is_empty());
    }

    #[test]
    fn boundary_space_is_shared_between_markers() {
        let genus = marker_pattern(&tokens(&["f", "m"]), GENUS_FOLLOW).unwrap();
        assert_eq!(claimed(&genus, "x f m y"), vec![" f", " m"]);
    }

    #[test]
    fn marker_order_falls_through_on_failed_lookahead() {
        let grammar = marker_pattern(&tokens(&["tr", "int", "tr/int"]), GRAMMAR_FOLLOW).unwrap();
        assert_eq!(claimed(&grammar, "lavurar tr/int  arbeiten"), vec![" tr/int"]);
    }

    #[test]
    fn marker_spaces_match_any_whitespace() {
        let grammar = marker_pattern(&tokens(&["(refl) int"]), GRAMMAR_FOLLOW).unwrap();
        assert_eq!(claimed(&grammar, "sich freuen (refl)\tint  x"), vec![" (refl)\tint"]);
    }

    #[test]
    fn gloss_needs_leading_boundary() {
        assert_eq!(
            claimed(&GLOSS, "entstellen (verunstalten)  sfigurar (sfurmar)"),
            vec!["(verunstalten)", "(sfurmar)"]
        );
        assert!(claimed(&GLOSS, "Student(en)  student").is_empty());
    }

    #[test]
    fn gloss_claims_word_closing_a_paren() {
        assert_eq!(claimed(&GLOSS, "Zauber (Magie.Hexerei)  magia"), vec!["Hexerei"]);
    }

    #[test]
    fn sub_gloss_requires_a_period() {
        assert_eq!(claimed(&SUB_GLOSS, "Löwe  liun (zool.)"), vec!["(zool.)"]);
        assert_eq!(claimed(&SUB_GLOSS, "x (econ. polit.) y"), vec!["(econ. polit.)"]);
        assert!(claimed(&SUB_GLOSS, "x (zool) y").is_empty());
    }

    #[test]
    fn remove_spans_cuts_in_order() {
        let text = "Haus n  chasa f ";
        assert_eq!(remove_spans(text, &[4..6, 13..15]), "Haus  chasa ");
        assert_eq!(remove_spans(text, &[]), text);
    }
}
