//! Penn Treebank style word segmenter.
//!
//! This is the default segmenter. It rewrites the text with an ordered list of
//! regular-expression rules that pad punctuation and clitics with spaces, then
//! splits on whitespace. Rules run in five groups:
//!
//! 1. Opening double quotes become ```` `` ````.
//! 2. Punctuation is split off: a string-final period, `:` and `,` unless a
//!    digit follows, `...`, `; @ # $ % &`, `?` and `!`.
//! 3. Brackets and `--` become tokens of their own. A period that ends a word
//!    inside the text is split off too, except after a known abbreviation
//!    (`mr.`, `corp.`), a single-letter initial or a dotted form like `u.s.`.
//! 4. Closing double quotes become `''` and the clitics `'s 'm 'd 'll 're
//!    've n't` are split from their host word.
//! 5. Fused forms such as `cannot`, `gonna` and `'tis` are split in two.
//!
//! The rules expect lowercase input, which the tokenizer pipeline guarantees.
//!
//! # Examples
//!
//! ```
//! use sentitok::analysis::segmenter::Segmenter;
//! use sentitok::analysis::segmenter::treebank::TreebankSegmenter;
//!
//! let segmenter = TreebankSegmenter::new().unwrap();
//! let tokens: Vec<String> = segmenter
//!     .segment("they don't sell, they rent.")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["they", "do", "n't", "sell", ",", "they", "rent", "."]);
//! ```

use std::sync::Arc;

use regex::{Captures, Regex};

use crate::analysis::segmenter::Segmenter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SentitokError};

const STARTING_QUOTES: &[(&str, &str)] = &[
    (r#"^""#, "``"),
    (r"(``)", " ${1} "),
    (r#"([ (\[{<])("|'')"#, "${1} `` "),
];

const PUNCTUATION: &[(&str, &str)] = &[
    (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
    (r"([:,])([^\d])", " ${1} ${2}"),
    (r"([:,])$", " ${1} "),
    (r"\.\.\.", " ... "),
    (r"[;@#$%&]", " ${0} "),
    (r"[?!]", " ${0} "),
    (r"([^'])' ", "${1} ' "),
];

const BRACKETS: &[(&str, &str)] = &[(r"[\]\[(){}<>]", " ${0} "), (r"--", " -- ")];

/// Words that keep their trailing period inside a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "inc", "corp", "co", "ltd", "llc", "plc",
    "bros", "vs", "etc", "approx", "dept", "jan", "feb", "apr", "aug", "sep", "sept", "oct", "nov",
    "dec",
];

/// A word ending in a period followed by whitespace.
const SENTENCE_PERIOD: &str = r"(\S+)\.(\s)";

const ENDING_QUOTES: &[(&str, &str)] = &[
    (r"''", " '' "),
    (r#"""#, " '' "),
    (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
];

const CONTRACTIONS: &[(&str, &str)] = &[
    (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
    (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
    (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
    (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
    (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
    (r"(?i)\b(wan)(na)(\s)", " ${1} ${2}${3}"),
    (r"(?i) ('t)(is)\b", " ${1} ${2} "),
    (r"(?i) ('t)(was)\b", " ${1} ${2} "),
];

/// A compiled rewrite rule.
#[derive(Debug)]
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn compile_all(table: &[(&str, &'static str)]) -> Result<Vec<Rule>> {
        table
            .iter()
            .map(|&(pattern, replacement)| {
                let pattern = Regex::new(pattern).map_err(|e| {
                    SentitokError::analysis(format!("Invalid segmentation rule {pattern:?}: {e}"))
                })?;
                Ok(Rule {
                    pattern,
                    replacement,
                })
            })
            .collect()
    }

    fn apply(&self, text: String) -> String {
        self.pattern
            .replace_all(&text, self.replacement)
            .into_owned()
    }
}

/// A segmenter following Penn Treebank conventions.
///
/// Punctuation marks are emitted as their own tokens and English
/// contractions are split (`"don't"` becomes `"do"`, `"n't"`).
#[derive(Clone, Debug)]
pub struct TreebankSegmenter {
    /// Rules applied before the text is padded with spaces
    leading_rules: Arc<Vec<Rule>>,
    /// Rules that rely on a trailing space after every word
    trailing_rules: Arc<Vec<Rule>>,
    sentence_period: Arc<Regex>,
}

impl TreebankSegmenter {
    /// Create a new Treebank segmenter, compiling its rule tables.
    pub fn new() -> Result<Self> {
        let mut leading_rules = Rule::compile_all(STARTING_QUOTES)?;
        leading_rules.extend(Rule::compile_all(PUNCTUATION)?);
        leading_rules.extend(Rule::compile_all(BRACKETS)?);

        let mut trailing_rules = Rule::compile_all(ENDING_QUOTES)?;
        trailing_rules.extend(Rule::compile_all(CONTRACTIONS)?);

        let sentence_period = Regex::new(SENTENCE_PERIOD).map_err(|e| {
            SentitokError::analysis(format!("Invalid segmentation rule {SENTENCE_PERIOD:?}: {e}"))
        })?;

        Ok(TreebankSegmenter {
            leading_rules: Arc::new(leading_rules),
            trailing_rules: Arc::new(trailing_rules),
            sentence_period: Arc::new(sentence_period),
        })
    }

    /// Whether `word` keeps the period that follows it.
    fn keeps_period(word: &str) -> bool {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let mut chars = word.chars();

        match (chars.next(), chars.next_back()) {
            (None, _) => true,
            // single-letter initial
            (Some(first), None) => first.is_alphabetic(),
            // numbers such as `5` or `12.5`
            (Some(_), Some(last)) if last.is_numeric() => false,
            (Some(_), Some(last)) => {
                !last.is_alphanumeric() || word.contains('.') || ABBREVIATIONS.contains(&word)
            }
        }
    }

    /// Split off periods that end a word inside the text.
    fn split_sentence_periods(&self, text: &str) -> String {
        self.sentence_period
            .replace_all(text, |caps: &Captures| {
                if Self::keeps_period(&caps[1]) {
                    format!("{}.{}", &caps[1], &caps[2])
                } else {
                    format!("{} .{}", &caps[1], &caps[2])
                }
            })
            .into_owned()
    }

    /// Get the number of rewrite rules.
    pub fn rule_count(&self) -> usize {
        self.leading_rules.len() + self.trailing_rules.len()
    }

    fn rewrite(&self, text: &str) -> String {
        let text = self
            .leading_rules
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(text));
        let text = self.split_sentence_periods(&text);

        let padded = format!(" {text} ");

        self.trailing_rules
            .iter()
            .fold(padded, |text, rule| rule.apply(text))
    }
}

impl Default for TreebankSegmenter {
    fn default() -> Self {
        Self::new().expect("Treebank rule tables should compile")
    }
}

impl Segmenter for TreebankSegmenter {
    fn segment(&self, text: &str) -> Result<TokenStream> {
        let rewritten = self.rewrite(text);
        let tokens: Vec<Token> = rewritten
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "treebank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        TreebankSegmenter::new()
            .unwrap()
            .segment(text)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_final_period_is_split() {
        assert_eq!(
            texts("the quick brown fox jumps."),
            vec!["the", "quick", "brown", "fox", "jumps", "."]
        );
    }

    #[test]
    fn test_interior_sentence_periods() {
        assert_eq!(
            texts("profits fell. revenue rose."),
            vec!["profits", "fell", ".", "revenue", "rose", "."]
        );
        assert_eq!(texts("the u.s. economy"), vec!["the", "u.s.", "economy"]);
        assert_eq!(
            texts("(sales fell.) next"),
            vec!["(", "sales", "fell", ".", ")", "next"]
        );
    }

    #[test]
    fn test_abbreviations_keep_their_period() {
        assert_eq!(
            texts("mr. smith sold."),
            vec!["mr.", "smith", "sold", "."]
        );
        assert_eq!(
            texts("shares of acme corp. rallied"),
            vec!["shares", "of", "acme", "corp.", "rallied"]
        );
        assert_eq!(texts("j. smith resigned"), vec!["j.", "smith", "resigned"]);
    }

    #[test]
    fn test_number_final_period_is_split() {
        assert_eq!(texts("rose 5. then"), vec!["rose", "5", ".", "then"]);
        assert_eq!(
            texts("margin was 12.5. outlook"),
            vec!["margin", "was", "12.5", ".", "outlook"]
        );
    }

    #[test]
    fn test_commas_and_numbers() {
        assert_eq!(texts("hello, world!"), vec!["hello", ",", "world", "!"]);
        assert_eq!(texts("1,000 shares"), vec!["1,000", "shares"]);
        assert_eq!(texts("note: up"), vec!["note", ":", "up"]);
    }

    #[test]
    fn test_symbols_and_brackets() {
        assert_eq!(texts("$5 & 10%"), vec!["$", "5", "&", "10", "%"]);
        assert_eq!(texts("(good) [bad]"), vec!["(", "good", ")", "[", "bad", "]"]);
        assert_eq!(texts("up--down"), vec!["up", "--", "down"]);
        assert_eq!(texts("wait... what?"), vec!["wait", "...", "what", "?"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(texts("don't stop"), vec!["do", "n't", "stop"]);
        assert_eq!(
            texts("it's john's book"),
            vec!["it", "'s", "john", "'s", "book"]
        );
        assert_eq!(texts("we'll see"), vec!["we", "'ll", "see"]);
        assert_eq!(texts("i cannot go"), vec!["i", "can", "not", "go"]);
        assert_eq!(texts("gonna win"), vec!["gon", "na", "win"]);
        assert_eq!(texts("i wanna go"), vec!["i", "wan", "na", "go"]);
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            texts("\"great\" results"),
            vec!["``", "great", "''", "results"]
        );
        assert_eq!(
            texts("he said \"no\""),
            vec!["he", "said", "``", "no", "''"]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(texts("").is_empty());
        assert!(texts("   \t\n ").is_empty());
    }

    #[test]
    fn test_positions_follow_text_order() {
        let segmenter = TreebankSegmenter::new().unwrap();
        let tokens: Vec<Token> = segmenter.segment("a, b.").unwrap().collect();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_segmenter_name() {
        let segmenter = TreebankSegmenter::default();
        assert_eq!(segmenter.name(), "treebank");
        assert!(segmenter.rule_count() > 0);
    }
}
