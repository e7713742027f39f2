//! Per-line repair of known defects in the dictionary source.

/// Repairs a dangling opening parenthesis and strips carriage returns.
///
/// Only one unmatched `(` at the end of the line is repaired; deeper
/// imbalance is left alone. Tabs and runs of spaces are kept, since the
/// headword split depends on them.
pub fn normalize_line(raw: &str) -> String {
    let mut line = raw.to_string();
    if has_unclosed_paren(&line) {
        line.push(')');
    }
    line.retain(|c| c != '\r');
    line
}

// An opening parenthesis with no closing one anywhere after it.
fn has_unclosed_paren(line: &str) -> bool {
    line.rfind('(')
        .map(|open| !line[open..].contains(')'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_trailing_paren() {
        assert_eq!(normalize_line("Haus (Gebäude"), "Haus (Gebäude)");
    }

    #[test]
    fn closes_paren_before_carriage_return() {
        assert_eq!(normalize_line("Haus  chasa (edifizi\r"), "Haus  chasa (edifizi)");
    }

    #[test]
    fn leaves_balanced_lines_alone() {
        let line = "entstellen (verunstalten)  sfigurar";
        assert_eq!(normalize_line(line), line);
    }

    #[test]
    fn repairs_only_the_last_open_paren() {
        assert_eq!(normalize_line("a (b) c (d"), "a (b) c (d)");
        assert_eq!(normalize_line("a (b c) d"), "a (b c) d");
    }

    #[test]
    fn strips_every_carriage_return_but_keeps_tabs_and_spaces() {
        assert_eq!(normalize_line("Haus\r  chasa\t f\r"), "Haus  chasa\t f");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        for raw in [
            "Haus (Gebäude",
            "Allianz f  alianza f\r",
            "anbei adv  aschunto",
            "",
            "(",
        ] {
            let once = normalize_line(raw);
            assert_eq!(normalize_line(&once), once, "not idempotent for {raw:?}");
        }
    }
}
