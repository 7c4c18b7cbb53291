//! Pipeline orchestration: fixed pass order, substitution tables, per-page
//! fan-out and document assembly.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dehyphenate::{dehyphenate, LINE_CONTINUATION};
use crate::lexicon::{detect_language, Lexicon};
use crate::normalize::normalize;
use crate::spacing::{correct_spacing, DEFAULT_EXCEPTIONS};

/// Known OCR artifacts, replaced literally and exhaustively in this order.
/// Later entries see text already altered by earlier ones; the order is part
/// of the contract.
const OCR_ARTIFACTS: &[(&str, &str)] = &[
    ("t0", "to"),
    ("'$", "'s"),
    (",,", ", "),
    ("_ ", " "),
    (" '", "'"),
];

/// Abbreviations the spacing pass may have pulled apart, restored to their
/// canonical form as the last substitution before dehyphenation.
const SPACED_ABBREVIATIONS: &[(&str, &str)] = &[
    ("i. e.", "i.e."),
    ("e. g.", "e.g."),
    ("e. g", "e.g."),
    (" ,", ","),
];

/// Caller-facing configuration for the post-processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Lowercase all text during normalization.
    pub lowercase: bool,
    /// Language code for transliteration and dictionary selection; `"auto"`
    /// detects the language from the page text.
    pub language: String,
    /// Pages beyond this count are dropped before processing.
    pub max_pages: usize,
    /// Re-insert a space after a period between two digits (`5.73` → `5. 73`).
    pub numeric_period_spacing: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            lowercase: false,
            language: "en".to_string(),
            max_pages: 20,
            numeric_period_spacing: false,
        }
    }
}

/// Cleaned document text plus processing metadata, mirroring what the
/// upstream conversion step reports to its callers.
#[derive(Debug, Clone, Serialize)]
pub struct CleanSummary {
    pub num_pages: usize,
    /// Elapsed processing time in seconds, rounded to two decimals.
    pub runtime: f64,
    /// ISO-8601 date the document was processed.
    pub date: String,
    pub text: String,
    /// True when the input held more than `max_pages` pages.
    pub truncated: bool,
    /// Character length of the joined text.
    pub length: usize,
}

fn apply_table(text: &str, table: &[(&str, &str)]) -> String {
    let mut s = text.to_string();
    for (pattern, replacement) in table {
        s = s.replace(pattern, replacement);
    }
    s
}

/// Run the full post-processing chain over one page of raw OCR text.
///
/// Fixed composition, order-sensitive: normalize → spacing → artifact table →
/// spacing → abbreviation restoration → dehyphenation. Pure; the only state
/// touched is the read-only lexicon.
pub fn postprocess(text: &str, opts: &CleanOptions, lexicon: &dyn Lexicon) -> String {
    let lang = if opts.language == "auto" {
        detect_language(text).unwrap_or("en")
    } else {
        opts.language.as_str()
    };

    let s = normalize(text, opts.lowercase, lang);
    let s = correct_spacing(&s, opts.numeric_period_spacing, DEFAULT_EXCEPTIONS);
    let s = apply_table(&s, OCR_ARTIFACTS);
    let s = correct_spacing(&s, opts.numeric_period_spacing, DEFAULT_EXCEPTIONS);
    let s = apply_table(&s, SPACED_ABBREVIATIONS);
    dehyphenate(&s, LINE_CONTINUATION, lexicon)
}

/// Clean a batch of pages. Pages are independent, so the work fans out
/// across threads; the output order always matches the input order.
pub fn clean_pages(pages: &[String], opts: &CleanOptions, lexicon: &dyn Lexicon) -> Vec<String> {
    pages
        .par_iter()
        .map(|page| postprocess(page, opts, lexicon))
        .collect()
}

/// Clean an ordered sequence of raw page segments into a single document.
///
/// Applies the `max_pages` cap (recording whether anything was dropped),
/// cleans the remaining pages in parallel, and joins them with a blank line.
pub fn clean_document(pages: &[String], opts: &CleanOptions, lexicon: &dyn Lexicon) -> CleanSummary {
    let start = Instant::now();

    let truncated = pages.len() > opts.max_pages;
    if truncated {
        warn!(
            pages = pages.len(),
            max_pages = opts.max_pages,
            "input has more pages than allowed, truncating"
        );
    }
    let pages = &pages[..pages.len().min(opts.max_pages)];

    info!(pages = pages.len(), "post-processing OCR pages");
    let cleaned = clean_pages(pages, opts, lexicon);
    let text = cleaned.join("\n\n");

    let runtime = (start.elapsed().as_secs_f64() * 100.0).round() / 100.0;
    info!(runtime, "post-processing complete");

    CleanSummary {
        num_pages: pages.len(),
        runtime,
        date: chrono::Local::now().date_naive().to_string(),
        length: text.len(),
        truncated,
        text,
    }
}
