//! Text analysis building blocks.
//!
//! Char filters, segmenters, token filters and the stopword lexicon, plus the
//! pipeline analyzer that chains them together.

pub mod analyzer;
pub mod char_filter;
pub mod segmenter;
pub mod stopwords;
pub mod token;
pub mod token_filter;

pub use analyzer::*;
pub use char_filter::*;
pub use segmenter::*;
pub use stopwords::*;
pub use token::*;
pub use token_filter::*;
