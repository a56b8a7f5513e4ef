//! Pipeline analyzer that combines char filters, a segmenter and token filters.
//!
//! The pipeline applies processing in this order:
//! 1. Char filters rewrite the raw text
//! 2. The segmenter splits the text into tokens
//! 3. Token filters run sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentitok::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use sentitok::analysis::char_filter::LowercaseCharFilter;
//! use sentitok::analysis::segmenter::UnicodeWordSegmenter;
//! use sentitok::analysis::token_filter::StopFilter;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordSegmenter::new()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])))
//!     .with_name("my_pipeline");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A configurable analyzer that combines a segmenter with chains of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    segmenter: Arc<dyn Segmenter>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given segmenter.
    pub fn new(segmenter: Arc<dyn Segmenter>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", segmenter.name()),
            segmenter,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the segmenter used by this analyzer.
    pub fn segmenter(&self) -> &Arc<dyn Segmenter> {
        &self.segmenter
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the token filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = Cow::Borrowed(text);
        for char_filter in &self.char_filters {
            filtered_text = Cow::Owned(char_filter.filter(&filtered_text));
        }

        let mut tokens = self.segmenter.segment(&filtered_text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("segmenter", &self.segmenter.name())
            .field(
                "char_filters",
                &self.char_filters.iter().map(|filter| filter.name()).collect::<Vec<_>>(),
            )
            .field(
                "filters",
                &self.filters.iter().map(|filter| filter.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
