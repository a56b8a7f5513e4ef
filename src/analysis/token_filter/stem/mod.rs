//! Stemming token filter and stemmer implementations.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;

pub use porter::PorterStemmer;

/// Filter that replaces every token with its stem.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl Debug for StemFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Get the stemmer used by this filter.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmed_tokens = tokens
            .map(|token| {
                let stemmed = self.stemmer.stem(&token.text)?;
                Ok(token.with_text(stemmed))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Box::new(stemmed_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::error::SentitokError;

    struct TruncatingStemmer;

    impl Stemmer for TruncatingStemmer {
        fn stem(&self, word: &str) -> Result<String> {
            Ok(word.chars().take(3).collect())
        }

        fn name(&self) -> &'static str {
            "truncating"
        }
    }

    struct RejectingStemmer;

    impl Stemmer for RejectingStemmer {
        fn stem(&self, word: &str) -> Result<String> {
            Err(SentitokError::analysis(format!("cannot stem {word:?}")))
        }

        fn name(&self) -> &'static str {
            "rejecting"
        }
    }

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![
            Token::new("jumps", 0),
            Token::new("jumping", 1),
            Token::new("jumped", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|token| token.text == "jump"));
        assert_eq!(result[2].position, 2);
    }

    #[test]
    fn test_custom_stemmer() {
        let filter = StemFilter::with_stemmer(Arc::new(TruncatingStemmer));
        let tokens = vec![Token::new("market", 0), Token::new("up", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result[0].text, "mar");
        assert_eq!(result[1].text, "up");
        assert_eq!(filter.stemmer().name(), "truncating");
    }

    #[test]
    fn test_stemmer_error_propagates() {
        let filter = StemFilter::with_stemmer(Arc::new(RejectingStemmer));
        let tokens = vec![Token::new("market", 0)];

        let error = filter.filter(Box::new(tokens.into_iter())).err().unwrap();
        assert!(matches!(error, SentitokError::Analysis(_)));
        assert!(error.to_string().contains("cannot stem \"market\""));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
        assert!(format!("{:?}", StemFilter::new()).contains("porter"));
    }
}
