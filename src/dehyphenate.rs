//! Spell-check-guided dehyphenation.
//!
//! OCR line wrapping leaves a hyphen-plus-space behind wherever a word was
//! broken at a line end. Each occurrence is either a true word split
//! ("docu- ment" → "document") or a legitimate pair of words
//! ("machine- learning" → "machine learning"). The lexicon decides: if the
//! fragments joined with nothing in between form a known word, the marker is
//! deleted; otherwise it becomes a single space.

use crate::lexicon::Lexicon;

/// The line-continuation marker left behind by the upstream flattening.
pub const LINE_CONTINUATION: &str = "- ";

/// Last whitespace-delimited token of `s`, reduced to its alphabetic
/// characters.
fn trailing_fragment(s: &str) -> String {
    s.split_whitespace()
        .next_back()
        .map(alpha_only)
        .unwrap_or_default()
}

/// First whitespace-delimited token of `s`, reduced to its alphabetic
/// characters.
fn leading_fragment(s: &str) -> String {
    s.split_whitespace()
        .next()
        .map(alpha_only)
        .unwrap_or_default()
}

fn alpha_only(token: &str) -> String {
    token.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Resolve every occurrence of `marker` in `text` to a merge or a split.
///
/// Implemented as a left-to-right scan over the text rebuilding an output
/// buffer: at each marker, the merge candidate is formed from the last token
/// already emitted and the first token still ahead, and the lexicon verdict
/// decides whether the marker is dropped or replaced by a single space. Only
/// alphabetic characters participate in the candidate; adjacent digits and
/// punctuation are excluded from the query but preserved in the output.
///
/// A resolution can itself uncover a marker at the junction (`"well-- known"`
/// splits into `"well- known"`), so the scan re-enters until none remains.
/// Every decision consumes one hyphen character and never produces one, so
/// the number of decisions is bounded by the hyphen count of the input.
pub fn dehyphenate(text: &str, marker: &str, lexicon: &dyn Lexicon) -> String {
    if marker.is_empty() || !text.contains(marker) {
        return text.to_string();
    }

    let mut text = text.to_string();
    while text.contains(marker) {
        text = resolve_markers(&text, marker, lexicon);
    }
    text
}

/// One scan over `text`, deciding every marker it encounters.
fn resolve_markers(text: &str, marker: &str, lexicon: &dyn Lexicon) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(marker) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + marker.len()..];

        let candidate = format!("{}{}", trailing_fragment(&out), leading_fragment(rest));
        if !lexicon.is_known(&candidate) {
            out.push(' ');
        }
    }
    out.push_str(rest);
    out
}
