//! Unicode word segmenter.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and keeps only the
//! segments that contain a letter or digit, so punctuation never reaches the
//! token stream.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::segmenter::Segmenter;
//! use sentitok::analysis::segmenter::unicode_word::UnicodeWordSegmenter;
//!
//! let segmenter = UnicodeWordSegmenter::new();
//! let tokens: Vec<_> = segmenter.segment("profits rose, sharply!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, "sharply");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A segmenter that splits text on Unicode word boundaries.
///
/// Contractions stay whole (`"don't"` is one token) and punctuation is
/// dropped, which suits callers that only care about alphabetic words.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordSegmenter;

impl UnicodeWordSegmenter {
    /// Create a new Unicode word segmenter.
    pub fn new() -> Self {
        UnicodeWordSegmenter
    }
}

impl Segmenter for UnicodeWordSegmenter {
    fn segment(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_words()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
