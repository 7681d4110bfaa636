//! Naive Bayes sentiment classification.
//!
//! Multinomial model with add-one smoothing, trained once from a fixed
//! corpus and immutable afterwards. Scoring runs in log space so longer
//! inputs cannot underflow, then normalizes into posteriors that sum to 1.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Satisfied, complimentary feedback
    Positive,
    /// Complaints and dissatisfaction
    Negative,
    /// Informational or procedural messages
    Neutral,
    /// Hazards and situations needing immediate attention
    Urgent,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Sentiment {
    /// All labels in priority order; classification ties resolve to the
    /// earliest entry.
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Urgent,
    ];

    /// Returns the wire label for the sentiment
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Urgent => "urgent",
        }
    }

    fn index(&self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Negative => 1,
            Sentiment::Neutral => 2,
            Sentiment::Urgent => 3,
        }
    }
}

/// A labelled, pre-tokenized document used to build the model
#[derive(Debug, Clone)]
pub struct TrainingExample {
    /// Word tokens of the document
    pub tokens: Vec<String>,
    /// The label the document belongs to
    pub label: Sentiment,
}

/// Relevance of a single label for one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    /// The label being scored
    pub label: Sentiment,
    /// Posterior probability of the label (0.0 - 1.0)
    pub value: f64,
}

/// Per-label relevance values for one classified input.
///
/// Holds exactly one entry per label, in priority order. Values are
/// posteriors: each lies in [0, 1] and the four sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    scores: Vec<LabelScore>,
}

impl ClassificationResult {
    fn new(scores: Vec<LabelScore>) -> Self {
        Self { scores }
    }

    /// The relevance value for a label
    pub fn value(&self, label: Sentiment) -> f64 {
        self.scores
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
            .unwrap_or(0.0)
    }

    /// The highest-scoring entry; ties keep the earliest label in priority
    /// order.
    pub fn best(&self) -> &LabelScore {
        let mut best = &self.scores[0];
        for score in &self.scores[1..] {
            if score.value > best.value {
                best = score;
            }
        }
        best
    }

    /// All entries in priority order
    pub fn scores(&self) -> &[LabelScore] {
        &self.scores
    }
}

/// Token statistics observed for a single label
#[derive(Debug, Clone, Default)]
struct ClassModel {
    /// Occurrences of each token across the label's documents
    token_counts: HashMap<String, usize>,
    /// Total tokens observed for the label
    total_tokens: usize,
    /// Number of documents observed for the label
    doc_count: usize,
}

impl ClassModel {
    fn observe(&mut self, tokens: &[String]) {
        for token in tokens {
            *self.token_counts.entry(token.clone()).or_insert(0) += 1;
            self.total_tokens += 1;
        }
        self.doc_count += 1;
    }

    fn token_count(&self, token: &str) -> usize {
        self.token_counts.get(token).copied().unwrap_or(0)
    }
}

/// Multinomial Naive Bayes classifier over the fixed sentiment labels
pub struct BayesClassifier {
    /// One model per label, in priority order
    models: [ClassModel; 4],
    /// Distinct tokens seen during training (smoothing denominator)
    vocabulary: HashSet<String>,
    /// Total number of training documents (prior denominator)
    total_docs: usize,
}

impl BayesClassifier {
    /// Build a classifier from labelled documents.
    ///
    /// `examples` must be non-empty. Training happens exactly once; the
    /// returned classifier is immutable and safe to share across threads.
    pub fn train(examples: &[TrainingExample]) -> Self {
        let mut models: [ClassModel; 4] = Default::default();
        let mut vocabulary = HashSet::new();

        for example in examples {
            models[example.label.index()].observe(&example.tokens);
            for token in &example.tokens {
                vocabulary.insert(token.clone());
            }
        }

        Self {
            models,
            vocabulary,
            total_docs: examples.len(),
        }
    }

    /// Joint log probability of the tokens under one label.
    ///
    /// Log prior (document fraction) plus smoothed per-token conditionals.
    /// Add-one smoothing keeps unseen tokens from zeroing the product; an
    /// empty token list leaves just the prior.
    fn log_likelihood(&self, tokens: &[String], label: Sentiment) -> f64 {
        let model = &self.models[label.index()];

        let prior = model.doc_count as f64 / self.total_docs as f64;
        let mut log_prob = prior.ln();

        let denominator = (model.total_tokens + self.vocabulary.len()) as f64;
        for token in tokens {
            let count = model.token_count(token);
            log_prob += ((count + 1) as f64 / denominator).ln();
        }

        log_prob
    }

    /// Score tokens against every label.
    ///
    /// Returns one value per label, normalized with log-sum-exp into
    /// posteriors. Unknown tokens contribute through smoothing alone, so
    /// any input, including an empty one, yields a usable result.
    pub fn classify(&self, tokens: &[String]) -> ClassificationResult {
        let log_probs: Vec<f64> = Sentiment::ALL
            .iter()
            .map(|&label| self.log_likelihood(tokens, label))
            .collect();

        let max_log = log_probs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = log_probs.iter().map(|lp| (lp - max_log).exp()).sum();

        let scores = Sentiment::ALL
            .iter()
            .zip(&log_probs)
            .map(|(&label, &lp)| LabelScore {
                label,
                value: (lp - max_log).exp() / total,
            })
            .collect();

        ClassificationResult::new(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_corpus() -> Vec<TrainingExample> {
        let corpus = [
            (Sentiment::Positive, "good"),
            (Sentiment::Negative, "bad"),
            (Sentiment::Neutral, "fine"),
            (Sentiment::Urgent, "fire"),
        ];

        corpus
            .iter()
            .map(|(label, token)| TrainingExample {
                tokens: vec![token.to_string()],
                label: *label,
            })
            .collect()
    }

    #[test]
    fn test_seen_token_wins_its_label() {
        let classifier = BayesClassifier::train(&tiny_corpus());

        let result = classifier.classify(&["good".to_string()]);
        assert_eq!(result.best().label, Sentiment::Positive);

        let result = classifier.classify(&["fire".to_string()]);
        assert_eq!(result.best().label, Sentiment::Urgent);
    }

    #[test]
    fn test_values_are_normalized_posteriors() {
        let classifier = BayesClassifier::train(&tiny_corpus());

        let result = classifier.classify(&["bad".to_string()]);
        let sum: f64 = result.scores().iter().map(|s| s.value).sum();

        assert!((sum - 1.0).abs() < 1e-9);
        for score in result.scores() {
            assert!(score.value >= 0.0 && score.value <= 1.0);
        }
    }

    #[test]
    fn test_one_entry_per_label_in_priority_order() {
        let classifier = BayesClassifier::train(&tiny_corpus());

        let result = classifier.classify(&["good".to_string()]);
        let labels: Vec<Sentiment> = result.scores().iter().map(|s| s.label).collect();

        assert_eq!(labels, Sentiment::ALL);
    }

    #[test]
    fn test_unknown_tokens_tie_breaks_by_priority() {
        // The tiny corpus is symmetric, so an unseen token scores every
        // label identically and the earliest label must win.
        let classifier = BayesClassifier::train(&tiny_corpus());

        let result = classifier.classify(&["unheard".to_string()]);
        assert_eq!(result.best().label, Sentiment::Positive);

        let values: Vec<f64> = result.scores().iter().map(|s| s.value).collect();
        for value in &values {
            assert!((value - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_input_yields_priors() {
        let classifier = BayesClassifier::train(&tiny_corpus());

        let result = classifier.classify(&[]);
        for score in result.scores() {
            assert!((score.value - 0.25).abs() < 1e-9);
        }
        assert_eq!(result.best().label, Sentiment::Positive);
    }

    #[test]
    fn test_value_lookup_matches_scores() {
        let classifier = BayesClassifier::train(&tiny_corpus());

        let result = classifier.classify(&["good".to_string()]);
        for score in result.scores() {
            assert_eq!(result.value(score.label), score.value);
        }
    }

    #[test]
    fn test_label_wire_names() {
        assert_eq!(Sentiment::Positive.label(), "positive");
        assert_eq!(Sentiment::Negative.label(), "negative");
        assert_eq!(Sentiment::Neutral.label(), "neutral");
        assert_eq!(Sentiment::Urgent.label(), "urgent");
        assert_eq!(Sentiment::Urgent.to_string(), "urgent");
    }
}
