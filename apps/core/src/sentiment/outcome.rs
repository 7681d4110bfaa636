//! Sentiment Outcome - Final result of analyzing one piece of feedback.
//!
//! Bundles the resolved label, the polarity score, and the full
//! classification so callers can inspect per-label values when needed.

use serde::Serialize;

use super::classifier::{ClassificationResult, Sentiment};

/// Result of running the analyzer over one feedback text
#[derive(Debug, Clone, Serialize)]
pub struct SentimentOutcome {
    /// Final label, after the urgency override
    pub sentiment: Sentiment,
    /// Polarity score in [-1.0, 1.0], negative side for urgent
    pub score: f64,
    /// Per-label normalized values from the classifier
    pub classification: ClassificationResult,
}

impl SentimentOutcome {
    /// Generate a compact summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Sentiment: {} ({:.2}), best value: {:.3}",
            self.sentiment,
            self.score,
            self.classification.best().value
        )
    }
}
