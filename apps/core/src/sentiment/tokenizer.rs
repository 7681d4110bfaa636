//! Word tokenization for sentiment analysis.
//!
//! Splits raw text into word tokens without touching their case. Training
//! and classification share the same instance, so both sides of the model
//! always see identical splitting rules.

use regex::Regex;
use std::sync::LazyLock;

// Compiled once at first use; the pattern is fixed.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex: word token pattern"));

/// Splits text into word tokens.
///
/// Tokens are maximal runs of word characters; whitespace and punctuation
/// separate them, so contractions split ("I'm" becomes "I", "m"). Case is
/// preserved: the trained model distinguishes "The" from "the", and only
/// the urgency keyword check lowercases on its own.
pub struct WordTokenizer;

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a new word tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into ordered word tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
