//! Unicode and noise-token normalization.
//!
//! First pass of the pipeline: repairs unicode, transliterates toward the
//! ASCII range, strips noise spans (URLs, emails, phone numbers) down to
//! fixed placeholder phrases, and flattens all line breaks and whitespace
//! runs into single spaces. Digits, currency symbols and punctuation pass
//! through untouched. Total over any input string.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Placeholder emitted in place of a URL.
pub const URL_PLACEHOLDER: &str = "this url";
/// Placeholder emitted in place of an email address.
pub const EMAIL_PLACEHOLDER: &str = "this email";
/// Placeholder emitted in place of a phone number.
pub const PHONE_PLACEHOLDER: &str = "this phone number";

lazy_static! {
    // Trailing sentence punctuation stays outside the match so "x.com." keeps
    // its period.
    static ref URL: Regex =
        Regex::new(r#"(?i)\b(?:https?://|www\.)\S*[^\s.,!?;:)"']"#).unwrap();
    static ref EMAIL: Regex =
        Regex::new(r"(?i)\b[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}\b").unwrap();
    // Requires separators between digit groups so decimals, years and page
    // numbers are not swallowed.
    static ref PHONE: Regex = Regex::new(
        r"(?:\+\d{1,3}[ .\-]?)?(?:\(\d{2,4}\)[ .\-]?|\d{2,4}[ .\-])\d{3,4}[ .\-]\d{2,4}"
    )
    .unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Map a typographic character to its nearest ASCII form, or None to keep it
/// for the NFKD pass.
fn ascii_fallback(c: char) -> Option<&'static str> {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => Some("'"),
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => Some("\""),
        '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}' => Some("-"),
        '\u{2026}' => Some("..."),
        '\u{00A0}' | '\u{2009}' | '\u{200A}' | '\u{2002}' | '\u{2003}' => Some(" "),
        '\u{00B7}' | '\u{2022}' => Some("*"),
        _ => None,
    }
}

/// German-specific expansions applied before decomposition, so "über" becomes
/// "ueber" rather than "uber".
fn german_fallback(c: char) -> Option<&'static str> {
    match c {
        'ä' => Some("ae"),
        'ö' => Some("oe"),
        'ü' => Some("ue"),
        'Ä' => Some("Ae"),
        'Ö' => Some("Oe"),
        'Ü' => Some("Ue"),
        'ß' => Some("ss"),
        _ => None,
    }
}

/// Transliterate text to the nearest ASCII-range representation.
///
/// NFKD decomposition splits ligatures (ﬁ → fi) and separates diacritics,
/// combining marks are dropped, typographic punctuation is mapped through a
/// small fallback table, and anything still outside ASCII is removed.
fn transliterate(text: &str, lang: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if lang == "de" {
            if let Some(rep) = german_fallback(c) {
                out.push_str(rep);
                continue;
            }
        }
        if let Some(rep) = ascii_fallback(c) {
            out.push_str(rep);
            continue;
        }
        for d in c.nfkd() {
            if is_combining_mark(d) {
                continue;
            }
            if d.is_ascii() && d != '\u{0}' {
                out.push(d);
            }
        }
    }
    out
}

/// Normalize raw OCR text.
///
/// Applies, in order: transliteration to ASCII, optional lowercasing, noise
/// replacement (URLs, emails, phone numbers), line-break removal and
/// whitespace collapsing. Line breaks become single spaces so that merged
/// lines never concatenate words.
pub fn normalize(text: &str, lowercase: bool, lang: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = transliterate(text, lang);
    if lowercase {
        s = s.to_lowercase();
    }

    let s = URL.replace_all(&s, URL_PLACEHOLDER);
    let s = EMAIL.replace_all(&s, EMAIL_PLACEHOLDER);
    let s = PHONE.replace_all(&s, PHONE_PLACEHOLDER);

    WHITESPACE.replace_all(&s, " ").trim().to_string()
}
