//! Char filters that pre-process the text before it reaches the segmenter.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::char_filter::{CharFilter, LowercaseCharFilter};
//!
//! let filter = LowercaseCharFilter::new();
//! assert_eq!(filter.filter("The Quick BROWN Fox"), "the quick brown fox");
//! ```

/// Trait for character filters that transform text before segmentation.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Lower-cases the whole input text.
///
/// Uses Unicode case mapping, so `"ÉTÉ"` becomes `"été"`. Lowering the text
/// before segmentation means every token the segmenter emits is already
/// lowercase and can be matched directly against a lowercase stopword set.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
