//! Tokenizers that turn raw text into filtered word tokens.
//!
//! # Examples
//!
//! ```
//! use sentitok::tokenizer::{SentimentTokenizer, Tokenizer};
//!
//! let tokenizer = SentimentTokenizer::new().unwrap();
//! let tokens = tokenizer.tokenize("The quick BROWN fox jumps.").unwrap();
//!
//! assert_eq!(tokens, vec!["quick", "brown", "fox", "jumps", "."]);
//! ```

use crate::error::Result;

/// Trait for tokenizers that produce word tokens from text.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered list of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod config;
pub mod sentiment;

pub use config::TokenizerConfig;
pub use sentiment::SentimentTokenizer;
