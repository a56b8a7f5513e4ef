//! Porter stemming algorithm implementation.
//!
//! This module implements the original Porter (1980) algorithm for reducing
//! English words to their stems.
//!
//! # Algorithm
//!
//! The stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals (1a), -ed/-ing (1b) and terminal -y (1c)
//! 2. Double suffixes: -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc. from long stems
//! 5. Remove a final -e (5a) and reduce -ll to -l (5b)
//!
//! Within a step only the longest matching suffix is considered. If its
//! condition fails the step leaves the word alone.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::token_filter::stem::Stemmer;
//! use sentitok::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("jumping")?, "jump");
//! assert_eq!(stemmer.stem("flies")?, "fli");
//! assert_eq!(stemmer.stem("relational")?, "relat");
//! # Ok::<(), sentitok::error::SentitokError>(())
//! ```

use crate::analysis::token_filter::stem::Stemmer;
use crate::error::Result;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm.
///
/// Stateless, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Mark which characters of `word` act as consonants.
    ///
    /// `y` is a consonant at the start of a word or after a vowel, so the
    /// flags are computed left to right in a single pass.
    fn consonants(word: &[char]) -> Vec<bool> {
        let mut flags: Vec<bool> = Vec::with_capacity(word.len());
        for (pos, &c) in word.iter().enumerate() {
            let consonant = match c {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => pos == 0 || !flags[pos - 1],
                _ => true,
            };
            flags.push(consonant);
        }
        flags
    }

    /// Calculate the measure `m` of a word, the number of VC sequences in
    /// the form `[C](VC){m}[V]`.
    fn measure(word: &[char]) -> usize {
        let flags = Self::consonants(word);
        flags
            .windows(2)
            .filter(|pair| !pair[0] && pair[1])
            .count()
    }

    fn contains_vowel(word: &[char]) -> bool {
        Self::consonants(word).iter().any(|&consonant| !consonant)
    }

    fn ends_with(word: &[char], suffix: &str) -> bool {
        let suffix_len = suffix.chars().count();
        word.len() >= suffix_len
            && word[word.len() - suffix_len..]
                .iter()
                .copied()
                .eq(suffix.chars())
    }

    /// The part of `word` before `suffix`; callers check `ends_with` first.
    fn stem_of<'a>(word: &'a [char], suffix: &str) -> &'a [char] {
        &word[..word.len() - suffix.chars().count()]
    }

    fn ends_with_double_consonant(word: &[char]) -> bool {
        let n = word.len();
        n >= 2 && word[n - 1] == word[n - 2] && Self::consonants(word)[n - 1]
    }

    /// Check for a consonant-vowel-consonant ending where the final
    /// consonant is not `w`, `x` or `y`.
    fn ends_cvc(word: &[char]) -> bool {
        let n = word.len();
        if n < 3 || matches!(word[n - 1], 'w' | 'x' | 'y') {
            return false;
        }
        let flags = Self::consonants(word);
        flags[n - 3] && !flags[n - 2] && flags[n - 1]
    }

    fn replace(word: &mut Vec<char>, suffix: &str, replacement: &str) {
        let stem_len = word.len() - suffix.chars().count();
        word.truncate(stem_len);
        word.extend(replacement.chars());
    }

    fn step1a(word: &mut Vec<char>) {
        if Self::ends_with(word, "sses") {
            Self::replace(word, "sses", "ss");
        } else if Self::ends_with(word, "ies") {
            Self::replace(word, "ies", "i");
        } else if Self::ends_with(word, "ss") {
            // unchanged
        } else if Self::ends_with(word, "s") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<char>) {
        if Self::ends_with(word, "eed") {
            if Self::measure(Self::stem_of(word, "eed")) > 0 {
                word.pop();
            }
            return;
        }

        let current: &[char] = word;
        let removed = ["ed", "ing"].into_iter().find(|&suffix| {
            Self::ends_with(current, suffix)
                && Self::contains_vowel(Self::stem_of(current, suffix))
        });

        let Some(suffix) = removed else {
            return;
        };
        Self::replace(word, suffix, "");

        if Self::ends_with(word, "at") || Self::ends_with(word, "bl") || Self::ends_with(word, "iz")
        {
            word.push('e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some('l') | Some('s') | Some('z'))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push('e');
        }
    }

    fn step1c(word: &mut Vec<char>) {
        if Self::ends_with(word, "y") && Self::contains_vowel(Self::stem_of(word, "y")) {
            Self::replace(word, "y", "i");
        }
    }

    /// Apply the longest matching suffix rule from `rules` when the remaining
    /// stem has a measure above `min_measure`.
    fn apply_longest(word: &mut Vec<char>, rules: &[(&str, &str)], min_measure: usize) {
        let current: &[char] = word;
        let longest = rules
            .iter()
            .filter(|(suffix, _)| Self::ends_with(current, suffix))
            .max_by_key(|(suffix, _)| suffix.len());

        if let Some(&(suffix, replacement)) = longest {
            if Self::measure(Self::stem_of(current, suffix)) > min_measure {
                Self::replace(word, suffix, replacement);
            }
        }
    }

    fn step2(word: &mut Vec<char>) {
        Self::apply_longest(word, STEP2_SUFFIXES, 0);
    }

    fn step3(word: &mut Vec<char>) {
        Self::apply_longest(word, STEP3_SUFFIXES, 0);
    }

    fn step4(word: &mut Vec<char>) {
        let current: &[char] = word;
        let longest = STEP4_SUFFIXES
            .iter()
            .copied()
            .filter(|suffix| Self::ends_with(current, suffix))
            .max_by_key(|suffix| suffix.len());

        let Some(suffix) = longest else {
            return;
        };

        let stem = Self::stem_of(current, suffix);
        if Self::measure(stem) <= 1 {
            return;
        }
        // -ion is only removed after s or t
        if suffix == "ion" && !matches!(stem.last(), Some('s') | Some('t')) {
            return;
        }
        Self::replace(word, suffix, "");
    }

    fn step5(word: &mut Vec<char>) {
        if Self::ends_with(word, "e") {
            let stem = Self::stem_of(word, "e");
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if Self::measure(word) > 1
            && Self::ends_with_double_consonant(word)
            && word.last() == Some(&'l')
        {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        let lowered = word.to_lowercase();
        let mut chars: Vec<char> = lowered.chars().collect();
        if chars.len() <= 2 {
            return Ok(lowered);
        }

        Self::step1a(&mut chars);
        Self::step1b(&mut chars);
        Self::step1c(&mut chars);
        Self::step2(&mut chars);
        Self::step3(&mut chars);
        Self::step4(&mut chars);
        Self::step5(&mut chars);

        Ok(chars.into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
