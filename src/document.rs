//! Hierarchical OCR result model and page flattening.
//!
//! The OCR inference stage (external to this crate) emits a
//! document → page → block → line → word tree with recognized text values.
//! This module mirrors that shape and flattens each page into the raw
//! per-page segment the post-processing pipeline consumes: words joined by
//! single spaces, with a `"\n\t"` marker opening each block.

use serde::{Deserialize, Serialize};

/// Marker inserted before each block when flattening a page.
pub const BLOCK_SEPARATOR: &str = "\n\t";

/// A single recognized word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub value: String,
}

/// A line of recognized words, left-to-right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub words: Vec<Word>,
}

/// A block of lines, top-to-bottom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub lines: Vec<Line>,
}

/// One scanned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub blocks: Vec<Block>,
}

/// A full OCR result, pages in reading order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Page {
    /// Flatten this page into a single raw segment.
    ///
    /// Word values are joined with single spaces; every block is preceded by
    /// [`BLOCK_SEPARATOR`]. The result is raw pipeline input, not clean text.
    pub fn flatten(&self) -> String {
        let mut text = String::new();
        for block in &self.blocks {
            text.push_str(BLOCK_SEPARATOR);
            for line in &block.lines {
                for word in &line.words {
                    text.push_str(&word.value);
                    text.push(' ');
                }
            }
        }
        text
    }
}

impl Document {
    /// One raw segment per page, in page order.
    pub fn segments(&self) -> Vec<String> {
        self.pages.iter().map(Page::flatten).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(words: &[&str]) -> Line {
        Line {
            words: words
                .iter()
                .map(|w| Word {
                    value: (*w).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn flatten_joins_words_and_marks_blocks() {
        let page = Page {
            blocks: vec![
                Block {
                    lines: vec![line(&["The", "quick"]), line(&["brown", "fox"])],
                },
                Block {
                    lines: vec![line(&["jumps"])],
                },
            ],
        };
        assert_eq!(page.flatten(), "\n\tThe quick brown fox \n\tjumps ");
    }

    #[test]
    fn segments_preserve_page_order() {
        let doc = Document {
            pages: vec![
                Page {
                    blocks: vec![Block {
                        lines: vec![line(&["one"])],
                    }],
                },
                Page {
                    blocks: vec![Block {
                        lines: vec![line(&["two"])],
                    }],
                },
            ],
        };
        let segs = doc.segments();
        assert_eq!(segs, vec!["\n\tone ", "\n\ttwo "]);
    }

    #[test]
    fn empty_page_flattens_to_empty() {
        let page = Page { blocks: vec![] };
        assert_eq!(page.flatten(), "");
    }
}
