//! Stopword lexicon.
//!
//! The English list ships inside the crate as a plain word-list resource and
//! is parsed once per process. Word lists can also be loaded from a file with
//! the same format: one word per line, blank lines and lines starting with
//! `#` ignored.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::stopwords::get_stopwords;
//!
//! let stopwords = get_stopwords().unwrap();
//! assert!(stopwords.contains("the"));
//! assert!(!stopwords.contains("profit"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;

use crate::error::{Result, SentitokError};

const ENGLISH_WORD_LIST: &str = include_str!("../../resources/stopwords/english.txt");

static ENGLISH_STOPWORDS: LazyLock<Result<Arc<StopwordSet>>> = LazyLock::new(|| {
    let set = StopwordSet::parse(ENGLISH_WORD_LIST);
    if set.is_empty() {
        return Err(SentitokError::resource_unavailable(
            "embedded english stopword list is empty",
        ));
    }
    debug!("loaded {} english stopwords", set.len());
    Ok(Arc::new(set))
});

/// An immutable set of lowercase stopwords.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from the given words, lower-casing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        StopwordSet { words }
    }

    /// Parse a word list: one word per line, `#` comments and blank lines skipped.
    pub fn parse(source: &str) -> Self {
        Self::from_words(
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Load a word list from a file.
    ///
    /// Fails with [`SentitokError::ResourceUnavailable`] when the file cannot
    /// be read or contains no words.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            SentitokError::resource_unavailable(format!(
                "cannot read stopword list {}: {e}",
                path.display()
            ))
        })?;

        let set = Self::parse(&source);
        if set.is_empty() {
            return Err(SentitokError::resource_unavailable(format!(
                "stopword list {} contains no words",
                path.display()
            )));
        }

        debug!("loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Check if a word is a stopword. The word must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Get the English stopword set.
///
/// The list is parsed on first use and shared afterwards.
pub fn get_stopwords() -> Result<Arc<StopwordSet>> {
    load_stopwords("english")
}

/// Load the stopword set for a language. Only `"english"` is available.
pub fn load_stopwords(language: &str) -> Result<Arc<StopwordSet>> {
    let language = language.trim();
    if language.is_empty() {
        return Err(SentitokError::invalid_argument("empty language name"));
    }

    if !language.eq_ignore_ascii_case("english") {
        return Err(SentitokError::resource_unavailable(format!(
            "no stopword list for language {language:?}"
        )));
    }

    match &*ENGLISH_STOPWORDS {
        Ok(set) => Ok(Arc::clone(set)),
        Err(e) => Err(SentitokError::resource_unavailable(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_english_stopwords() {
        let stopwords = get_stopwords().unwrap();

        assert_eq!(stopwords.len(), 179);
        for word in ["the", "a", "an", "and", "do", "don't", "it's", "s", "t"] {
            assert!(stopwords.contains(word), "{word} should be a stopword");
        }
        for word in ["quick", "profit", "n't", "'s", "."] {
            assert!(!stopwords.contains(word), "{word} should not be a stopword");
        }
        assert!(stopwords.iter().all(|word| word == word.to_lowercase()));
    }

    #[test]
    fn test_english_stopwords_are_shared() {
        let first = get_stopwords().unwrap();
        let second = load_stopwords("English").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unknown_language() {
        let error = load_stopwords("klingon").unwrap_err();
        assert!(error.is_resource_unavailable());

        let error = load_stopwords("  ").unwrap_err();
        assert!(matches!(error, SentitokError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_word_list() {
        let set = StopwordSet::parse("# header\nThe\n\n  and \n#skip\nOR\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("or"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# finance").unwrap();
        writeln!(file, "company").unwrap();
        writeln!(file, "shares").unwrap();

        let set = StopwordSet::from_path(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("company"));
    }

    #[test]
    fn test_from_path_missing_or_empty() {
        let error = StopwordSet::from_path("/nonexistent/stopwords.txt").unwrap_err();
        assert!(error.is_resource_unavailable());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();
        let error = StopwordSet::from_path(file.path()).unwrap_err();
        assert!(error.is_resource_unavailable());
    }
}
