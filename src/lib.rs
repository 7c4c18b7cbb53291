//! Post-processing for raw OCR output.
//!
//! Takes the noisy per-page text recovered from scanned PDF pages and turns
//! it into clean, readable prose through a fixed sequence of deterministic
//! passes: unicode/noise normalization, punctuation spacing correction, an
//! ordered table of known OCR-artifact substitutions, abbreviation
//! restoration, and finally a spell-check-guided dehyphenation pass that
//! decides, marker by marker, whether a line-break hyphen split one word or
//! separated two.
//!
//! The spelling dictionary is the only injected dependency: build a
//! [`Lexicon`] once at startup (Hunspell via [`HunspellLexicon`], or a plain
//! [`WordSet`]) and share it read-only across pages. Pages are independent,
//! so [`clean_pages`] and [`clean_document`] fan the work out across threads
//! while preserving page order.
//!
//! ```
//! use ocr_prose::{postprocess, CleanOptions, WordSet};
//!
//! let lexicon = WordSet::from_words(["document", "machine", "learning"]);
//! let raw = "This is a docu-\nment about machine- learning .";
//! let clean = postprocess(raw, &CleanOptions::default(), &lexicon);
//! assert_eq!(clean, "This is a document about machine learning.");
//! ```

pub mod dehyphenate;
pub mod document;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod spacing;

pub use dehyphenate::{dehyphenate, LINE_CONTINUATION};
pub use document::{Block, Document, Line, Page, Word};
pub use lexicon::{detect_language, HunspellLexicon, Lexicon, LexiconError, WordSet};
pub use normalize::normalize;
pub use pipeline::{clean_document, clean_pages, postprocess, CleanOptions, CleanSummary};
pub use spacing::{correct_spacing, DEFAULT_EXCEPTIONS};
