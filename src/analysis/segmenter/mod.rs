//! Word segmentation: splitting text into a stream of word tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for segmenters that split text into word tokens.
///
/// Implementations receive text that has already been through the char
/// filters of the pipeline. Errors are returned to the caller unchanged.
pub trait Segmenter: Send + Sync {
    /// Split the given text into a stream of tokens, in text order.
    fn segment(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod treebank;
pub mod unicode_word;

pub use treebank::TreebankSegmenter;
pub use unicode_word::UnicodeWordSegmenter;
