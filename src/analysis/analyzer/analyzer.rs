//! Core analyzer trait definition.
//!
//! An analyzer is a complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Segmenter → Filter 1 → ... → Filter N → Token Stream
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve many threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &str;
}
