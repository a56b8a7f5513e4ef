//! # Sentitok
//!
//! Word tokenization for sentiment analysis pipelines.
//!
//! ## Features
//!
//! - Lower-casing and Penn Treebank style word segmentation
//! - Optional Porter stemming
//! - English stopword filtering
//! - Pluggable segmenters, stemmers and stopword lists
//!
//! ```
//! use sentitok::prelude::*;
//!
//! let tokenizer = SentimentTokenizer::new().unwrap();
//! assert_eq!(
//!     tokenizer.tokenize_with("Shares were rallying", true).unwrap(),
//!     vec!["share", "ralli"]
//! );
//! ```

pub mod analysis;
pub mod error;
pub mod tokenizer;

pub mod prelude {
    pub use crate::analysis::segmenter::{Segmenter, TreebankSegmenter, UnicodeWordSegmenter};
    pub use crate::analysis::stopwords::{StopwordSet, get_stopwords, load_stopwords};
    pub use crate::analysis::token_filter::{PorterStemmer, Stemmer};
    pub use crate::error::{Result, SentitokError};
    pub use crate::tokenizer::{SentimentTokenizer, Tokenizer, TokenizerConfig};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
