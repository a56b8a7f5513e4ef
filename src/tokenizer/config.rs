//! Configuration for the sentiment tokenizer.

use serde::{Deserialize, Serialize};

/// Configuration for [`SentimentTokenizer`](super::SentimentTokenizer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Reduce every token to its stem before stopword filtering.
    pub stem: bool,
}

impl TokenizerConfig {
    /// Create a configuration with stemming disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable stemming.
    pub fn with_stem(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }
}
