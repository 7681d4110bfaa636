//! Keyword Extraction - Tracked-term matching for dashboard aggregation.
//!
//! Scans feedback text for a fixed list of service-related terms. Matches
//! are stored alongside the feedback row and power the "top keywords"
//! dashboard panel.

use std::collections::HashSet;

/// Terms worth tracking across feedback submissions
const TRACKED_KEYWORDS: &[&str] = &[
    "service", "wait", "time", "staff", "helpful", "process", "website", "online", "form",
    "parking", "clean", "facility",
];

/// Extracts tracked keywords from free-form feedback text
pub struct KeywordExtractor {
    /// Lowercase terms to look for
    tracked: HashSet<String>,
    /// Minimum word length to consider
    min_word_length: usize,
    /// Maximum number of keywords to return per text
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::with_config(3, 5)
    }

    /// Create an extractor with custom limits
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            tracked: TRACKED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_word_length,
            max_keywords,
        }
    }

    /// Extract tracked keywords in order of first appearance.
    ///
    /// Text is lowercased and stripped of punctuation before matching, so
    /// "Service!" matches but the possessive "service's" becomes
    /// "services" and does not.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
            .collect();

        let mut seen = HashSet::new();
        let mut keywords = Vec::new();
        for word in cleaned.split_whitespace() {
            // Duplicates are dropped before filtering, first occurrence wins
            if !seen.insert(word) {
                continue;
            }
            if word.len() >= self.min_word_length && self.tracked.contains(word) {
                keywords.push(word.to_string());
                if keywords.len() >= self.max_keywords {
                    break;
                }
            }
        }

        keywords
    }
}
