//! Stop filter implementation.
//!
//! Removes tokens whose text is a member of a [`StopwordSet`]. Matching is
//! exact, so tokens must already be lowercase.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::token_filter::Filter;
//! use sentitok::analysis::token_filter::stop::StopFilter;
//! use sentitok::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[1].position, 2);
//! ```

use std::sync::Arc;

use crate::analysis::stopwords::{StopwordSet, get_stopwords};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stopwords from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stopwords to remove
    stopwords: Arc<StopwordSet>,
}

impl StopFilter {
    /// Create a stop filter with the English stopword list.
    pub fn english() -> Result<Self> {
        Ok(Self::with_stopwords(get_stopwords()?))
    }

    /// Create a stop filter over a shared stopword set.
    pub fn with_stopwords(stopwords: Arc<StopwordSet>) -> Self {
        StopFilter { stopwords }
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_stopwords(Arc::new(StopwordSet::from_words(words)))
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the stopword set used by this filter.
    pub fn stopwords(&self) -> &Arc<StopwordSet> {
        &self.stopwords
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
