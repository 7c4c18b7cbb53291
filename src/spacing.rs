//! Punctuation spacing correction.
//!
//! Canonicalizes spacing around terminal punctuation and apostrophes. The
//! pass is idempotent: applying it twice yields the same output as once.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Abbreviations protected from the spacing rules. Each phrase is restored
/// from its space-stripped form after the other rules have run.
pub const DEFAULT_EXCEPTIONS: &[&str] = &["e.g.", "i.e.", "etc.", "cf.", "vs.", "p."];

lazy_static! {
    // A period strictly between two digits (numeric-period mode only).
    static ref NUMERIC_PERIOD: Regex = Regex::new(r"(\d)\.(\d)").unwrap();
    // Runs of terminal punctuation, possibly mixed with internal whitespace,
    // followed by whitespace. Requiring the trailing whitespace keeps
    // decimals like 5.73 intact.
    static ref PUNCT_RUN: Regex =
        Regex::new(r"\s*([?!.,]+(?:\s+[?!.,]+)*)\s+").unwrap();
    // Same, anchored at end of text (no trailing space emitted there).
    static ref PUNCT_RUN_END: Regex =
        Regex::new(r"\s*([?!.,]+(?:\s+[?!.,]+)*)\s*\z").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    // A space before ? . ! " when the punctuation ends a word (whitespace or
    // end of text follows).
    static ref SPACE_BEFORE_TERMINAL: Regex =
        Regex::new(r#"\s([?.!"](?:\s|\z))"#).unwrap();
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Correct spacing in a string.
///
/// `numeric_period_spacing` re-inserts a space after a period sitting between
/// two digits (`5.73` → `5. 73`); off by default so decimals in OCR text are
/// treated as intentional numerals. `exceptions` lists protected phrases,
/// restored verbatim after the spacing rules (see [`DEFAULT_EXCEPTIONS`]).
pub fn correct_spacing(s: &str, numeric_period_spacing: bool, exceptions: &[&str]) -> String {
    let mut s = s.to_string();

    if numeric_period_spacing {
        s = NUMERIC_PERIOD.replace_all(&s, "$1. $2").into_owned();
    }

    s = PUNCT_RUN
        .replace_all(&s, |caps: &Captures| {
            format!("{} ", strip_whitespace(&caps[1]))
        })
        .into_owned();
    s = PUNCT_RUN_END
        .replace_all(&s, |caps: &Captures| strip_whitespace(&caps[1]))
        .into_owned();

    s = WHITESPACE.replace_all(&s, " ").into_owned();
    s = SPACE_BEFORE_TERMINAL.replace_all(&s, "$1").into_owned();

    // Apostrophes never carry adjacent spaces; commas never a leading one.
    s = s.replace(" '", "'");
    s = s.replace("' ", "'");
    s = s.replace(" ,", ",");

    for e in exceptions {
        s = s.replace(&strip_whitespace(e), e);
    }

    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corr(s: &str) -> String {
        correct_spacing(s, false, DEFAULT_EXCEPTIONS)
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(corr("too   many    spaces"), "too many spaces");
    }

    #[test]
    fn punctuation_runs_get_one_trailing_space() {
        assert_eq!(corr("wait !? ! now"), "wait!?! now");
        assert_eq!(corr("stop .  Then"), "stop. Then");
    }

    #[test]
    fn stray_space_before_tight_comma_is_dropped() {
        assert_eq!(corr("first ,second"), "first,second");
    }

    #[test]
    fn space_before_terminal_punctuation_is_removed() {
        assert_eq!(corr("It costs $5.73 ."), "It costs $5.73.");
        assert_eq!(corr("really ? yes"), "really? yes");
    }

    #[test]
    fn decimals_survive_by_default() {
        assert_eq!(corr("pi is 3.14 exactly"), "pi is 3.14 exactly");
    }

    #[test]
    fn numeric_period_mode_splits_decimals() {
        assert_eq!(
            correct_spacing("5.73", true, DEFAULT_EXCEPTIONS),
            "5. 73"
        );
    }

    #[test]
    fn apostrophe_spacing_is_removed_on_both_sides() {
        assert_eq!(corr("don 't"), "don't");
        assert_eq!(corr("don' t"), "don't");
        assert_eq!(corr("' tis true"), "'tis true");
    }

    #[test]
    fn space_before_comma_is_removed() {
        assert_eq!(corr("one , two"), "one, two");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(corr("  padded  "), "padded");
    }

    #[test]
    fn idempotent_on_varied_inputs() {
        let samples = [
            "This is a test .  It has  spacing issues ,badly.",
            "wait !? ! now",
            "don 't stop' s",
            "e.g. some things , etc.",
            "numbers 5.73 and 1,000 stay",
            "",
            "...",
            "a ? b . c ! d , e",
        ];
        for s in samples {
            let once = corr(s);
            let twice = corr(&once);
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn numeric_mode_is_idempotent() {
        let once = correct_spacing("value 5.73 here", true, DEFAULT_EXCEPTIONS);
        let twice = correct_spacing(&once, true, DEFAULT_EXCEPTIONS);
        assert_eq!(once, "value 5. 73 here");
        assert_eq!(once, twice);
    }

    #[test]
    fn exceptions_are_restored() {
        // The spacing rules leave "e.g." alone; restoration is a no-op on
        // already-canonical text.
        assert_eq!(corr("see e.g. the appendix"), "see e.g. the appendix");
        assert_eq!(corr("compare cf. page 3"), "compare cf. page 3");
    }
}
