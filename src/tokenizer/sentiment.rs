//! The default tokenizer for sentiment analysis.
//!
//! Text is lower-cased, split into words by the Treebank segmenter, optionally
//! stemmed with the Porter stemmer, and stripped of English stopwords:
//!
//! ```text
//! "The quick BROWN fox jumps."
//!   → lowercase   "the quick brown fox jumps."
//!   → segment     [the, quick, brown, fox, jumps, .]
//!   → (stem)      [the, quick, brown, fox, jump, .]
//!   → stopwords   [quick, brown, fox, jump, .]
//! ```
//!
//! Stopwords are removed *after* stemming. A word whose stem happens to be a
//! stopword is dropped, and a stopword whose stem is not in the list survives
//! (`"was"` stems to `"wa"` and is kept).

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{CharFilter, LowercaseCharFilter};
use crate::analysis::segmenter::{Segmenter, TreebankSegmenter};
use crate::analysis::stopwords::{StopwordSet, get_stopwords};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{Filter, PorterStemmer, StemFilter, Stemmer, StopFilter};
use crate::error::Result;
use crate::tokenizer::{Tokenizer, TokenizerConfig};

/// Lower-casing, stopword-filtering, optionally stemming word tokenizer.
///
/// Construction loads every resource up front; afterwards the tokenizer is
/// immutable and can be shared across threads.
///
/// # Examples
///
/// ```
/// use sentitok::tokenizer::SentimentTokenizer;
///
/// let tokenizer = SentimentTokenizer::new().unwrap();
///
/// let tokens = tokenizer.tokenize_with("Jumps, jumping and jumped!", true).unwrap();
/// assert_eq!(tokens, vec!["jump", ",", "jump", "jump", "!"]);
/// ```
pub struct SentimentTokenizer {
    config: TokenizerConfig,
    segmenter: Arc<dyn Segmenter>,
    stemmer: Arc<dyn Stemmer>,
    stopwords: Arc<StopwordSet>,
    /// lowercase → segment → stop
    plain: PipelineAnalyzer,
    /// lowercase → segment → stem → stop
    stemmed: PipelineAnalyzer,
}

impl SentimentTokenizer {
    /// Create a tokenizer with the default segmenter, stemmer and English
    /// stopword list. Stemming is disabled.
    pub fn new() -> Result<Self> {
        Self::with_config(TokenizerConfig::default())
    }

    /// Create a tokenizer with the default components and the given configuration.
    ///
    /// Fails with [`SentitokError::ResourceUnavailable`](crate::error::SentitokError::ResourceUnavailable)
    /// if the stopword list cannot be loaded.
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        let segmenter = Arc::new(TreebankSegmenter::new()?);
        let stopwords = get_stopwords()?;

        Ok(Self::with_components(
            segmenter,
            Arc::new(PorterStemmer::new()),
            stopwords,
            config,
        ))
    }

    /// Create a tokenizer from explicit components.
    pub fn with_components(
        segmenter: Arc<dyn Segmenter>,
        stemmer: Arc<dyn Stemmer>,
        stopwords: Arc<StopwordSet>,
        config: TokenizerConfig,
    ) -> Self {
        let lowercase: Arc<dyn CharFilter> = Arc::new(LowercaseCharFilter::new());
        let stop_filter: Arc<dyn Filter> =
            Arc::new(StopFilter::with_stopwords(Arc::clone(&stopwords)));

        let plain = PipelineAnalyzer::new(Arc::clone(&segmenter))
            .add_char_filter(Arc::clone(&lowercase))
            .add_filter(Arc::clone(&stop_filter))
            .with_name("sentiment");

        let stemmed = PipelineAnalyzer::new(Arc::clone(&segmenter))
            .add_char_filter(lowercase)
            .add_filter(Arc::new(StemFilter::with_stemmer(Arc::clone(&stemmer))))
            .add_filter(stop_filter)
            .with_name("sentiment_stemmed");

        debug!(
            "sentiment tokenizer ready: segmenter={}, stemmer={}, stopwords={}, stem={}",
            segmenter.name(),
            stemmer.name(),
            stopwords.len(),
            config.stem
        );

        SentimentTokenizer {
            config,
            segmenter,
            stemmer,
            stopwords,
            plain,
            stemmed,
        }
    }

    /// Run the analysis pipeline and return tokens with their positions.
    pub fn analyze(&self, text: &str, stem: bool) -> Result<TokenStream> {
        if stem {
            self.stemmed.analyze(text)
        } else {
            self.plain.analyze(text)
        }
    }

    /// Tokenize `text`, stemming each token when `stem` is set.
    pub fn tokenize_with(&self, text: &str, stem: bool) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyze(text, stem)?.map(Token::into_text).collect();

        trace!(
            "tokenized {} bytes into {} tokens (stem={stem})",
            text.len(),
            tokens.len()
        );

        Ok(tokens)
    }

    /// Tokenize many texts in parallel.
    ///
    /// The output has one entry per input, in input order. The first error
    /// encountered is returned.
    pub fn tokenize_batch<S>(&self, texts: &[S], stem: bool) -> Result<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.tokenize_with(text.as_ref(), stem))
            .collect()
    }

    /// Get the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Get the stopword set.
    pub fn stopwords(&self) -> &Arc<StopwordSet> {
        &self.stopwords
    }

    /// Get the stemmer.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// Get the segmenter.
    pub fn segmenter(&self) -> &Arc<dyn Segmenter> {
        &self.segmenter
    }
}

impl Tokenizer for SentimentTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.tokenize_with(text, self.config.stem)
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}

impl Debug for SentimentTokenizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentTokenizer")
            .field("config", &self.config)
            .field("segmenter", &self.segmenter.name())
            .field("stemmer", &self.stemmer.name())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}
