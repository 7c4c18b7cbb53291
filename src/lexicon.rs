//! Spelling lexicon behind the dehyphenation resolver.
//!
//! The resolver needs exactly one capability: "is this token a known word?".
//! That capability is expressed as the [`Lexicon`] trait and injected into
//! the pipeline, so the dictionary is built once at startup and shared
//! read-only across pages. Two backings are provided: Hunspell dictionaries
//! through `zspell`, and plain word lists for languages where no usable
//! Hunspell pair exists.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};
use zspell::Dictionary;

/// Errors raised while building a lexicon. Queries themselves never fail.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("dictionary file not found: {0}")]
    Missing(String),
    #[error("failed to read dictionary file")]
    Io(#[from] std::io::Error),
    #[error("failed to build dictionary: {0}")]
    Build(String),
}

/// Word-membership oracle. Implementations must be cheap to query and safe
/// to share across threads; construction cost is paid once up front.
pub trait Lexicon: Send + Sync {
    fn is_known(&self, word: &str) -> bool;
}

/// Hunspell-backed lexicon for one language.
#[derive(Debug)]
pub struct HunspellLexicon {
    dict: Dictionary,
}

impl HunspellLexicon {
    /// Build from in-memory affix and dictionary sources.
    pub fn from_strings(aff: &str, dic: &str) -> Result<Self, LexiconError> {
        let dict = zspell::builder()
            .config_str(aff)
            .dict_str(dic)
            .build()
            .map_err(|e| LexiconError::Build(e.to_string()))?;
        Ok(Self { dict })
    }

    /// Load `<locale>.aff` / `<locale>.dic` for a language code from a
    /// directory of Hunspell dictionaries.
    pub fn from_dir(dict_dir: &Path, lang: &str) -> Result<Self, LexiconError> {
        let locale = locale_for(lang);
        let aff_path = dict_dir.join(format!("{locale}.aff"));
        let dic_path = dict_dir.join(format!("{locale}.dic"));
        if !aff_path.exists() || !dic_path.exists() {
            return Err(LexiconError::Missing(locale.to_string()));
        }

        let aff = fs::read_to_string(&aff_path)?;
        let dic = fs::read_to_string(&dic_path)?;
        let lexicon = Self::from_strings(&aff, &dic)?;
        info!(locale, "loaded Hunspell dictionary");
        Ok(lexicon)
    }
}

impl Lexicon for HunspellLexicon {
    fn is_known(&self, word: &str) -> bool {
        if self.dict.check_word(word) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.dict.check_word(&lower)
    }
}

/// Map a language code to the conventional Hunspell locale file name.
fn locale_for(lang: &str) -> &str {
    match lang {
        "en" => "en_US",
        "de" => "de_DE",
        "fr" => "fr_FR",
        other => other,
    }
}

/// Plain word-list lexicon: one word per line, `#` lines are comments.
#[derive(Debug)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            warn!(path = %path.display(), "word list is empty");
        }
        Ok(Self { words })
    }
}

impl Lexicon for WordSet {
    fn is_known(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }
}

/// Guess the language of a text sample, for callers that configured
/// `language = "auto"`. Collapses to the codes the normalizer and the
/// dictionary loader understand; anything unrecognized falls back to English.
pub fn detect_language(text: &str) -> Option<&'static str> {
    whatlang::detect(text).map(|info| match info.lang() {
        whatlang::Lang::Deu => "de",
        whatlang::Lang::Fra => "fr",
        _ => "en",
    })
}
