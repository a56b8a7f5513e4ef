//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! segmenter produces them, token filters rewrite or drop them, and the
//! tokenizer finally hands their text back to the caller.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::token::Token;
//!
//! let token = Token::new("jumps", 3);
//! assert_eq!(token.text, "jumps");
//! assert_eq!(token.position, 3);
//!
//! let stemmed = token.with_text("jump");
//! assert_eq!(stemmed.text, "jump");
//! assert_eq!(stemmed.position, 3);
//! ```

use std::fmt;

/// A single lexical unit extracted from input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in segmentation order (0-based).
    ///
    /// Filters that drop tokens keep the positions of the survivors, so a
    /// gap marks a removed token.
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Return this token with its text replaced.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Consume the token and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
