//! Sentiment Analyzer - Main orchestrator for the sentiment module.
//!
//! Tokenizes feedback text, scores it with the Naive Bayes model, applies
//! the urgency override, and derives the polarity score.
//!
//! The model is trained from the seed corpus below when the analyzer is
//! created and never changes afterwards, so a single instance can be
//! shared behind an `Arc` for the lifetime of the process.

use super::classifier::{BayesClassifier, Sentiment, TrainingExample};
use super::outcome::SentimentOutcome;
use super::tokenizer::WordTokenizer;

// Hand-written seed corpus, six examples per label. Deliberately small;
// inputs outside this vocabulary lean on smoothing and can be rough.
// Every model probability depends on these exact strings, so treat them
// as fixed inputs rather than tunable data.

const POSITIVE_EXAMPLES: &[&str] = &[
    "Great service, thank you!",
    "The staff was very helpful and friendly.",
    "I'm extremely satisfied with how quickly my issue was resolved.",
    "The new online system is much better than the old one.",
    "I appreciate the prompt response to my inquiry.",
    "The process was straightforward and easy to complete.",
];

const NEGATIVE_EXAMPLES: &[&str] = &[
    "The wait time was unacceptable.",
    "Your staff was rude and unhelpful.",
    "I'm disappointed with the quality of service.",
    "The process is too complicated and confusing.",
    "Nobody responded to my emails for a week.",
    "This is the worst government service I've ever experienced.",
];

const NEUTRAL_EXAMPLES: &[&str] = &[
    "I need information about renewing my license.",
    "What are your office hours?",
    "I received the document in the mail yesterday.",
    "The process took about as long as I expected.",
    "I submitted my application last week.",
    "Is there a form I need to fill out?",
];

const URGENT_EXAMPLES: &[&str] = &[
    "There's a dangerous pothole on Main Street that needs immediate attention.",
    "The water in our neighborhood has been brown for days, it's a health hazard!",
    "A fallen tree is blocking the entire road on Elm Street.",
    "The traffic light at 5th and Oak is malfunctioning, causing near accidents.",
    "There is a gas leak in our building! Please send someone immediately!",
    "The elevator in city hall is stuck with people inside!",
];

/// Tokens that escalate a negative classification to urgent
const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "dangerous",
    "hazard",
    "immediately",
    "critical",
];

/// Main sentiment analyzer combining tokenizer and trained model
pub struct SentimentAnalyzer {
    tokenizer: WordTokenizer,
    classifier: BayesClassifier,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Create an analyzer with the model trained from the seed corpus
    pub fn new() -> Self {
        let tokenizer = WordTokenizer::new();

        let mut examples = Vec::new();
        for (texts, label) in [
            (POSITIVE_EXAMPLES, Sentiment::Positive),
            (NEGATIVE_EXAMPLES, Sentiment::Negative),
            (NEUTRAL_EXAMPLES, Sentiment::Neutral),
            (URGENT_EXAMPLES, Sentiment::Urgent),
        ] {
            for text in texts {
                examples.push(TrainingExample {
                    tokens: tokenizer.tokenize(text),
                    label,
                });
            }
        }

        let classifier = BayesClassifier::train(&examples);

        Self {
            tokenizer,
            classifier,
        }
    }

    /// Check whether any token is an urgency keyword (case-insensitive)
    fn has_urgent_keyword(&self, tokens: &[String]) -> bool {
        tokens
            .iter()
            .any(|token| URGENT_KEYWORDS.contains(&token.to_lowercase().as_str()))
    }

    /// Analyze a piece of feedback text.
    ///
    /// Pure and synchronous: tokenize, classify, pick the best label,
    /// apply the urgency override, derive the score. Empty input is
    /// classified like any other; this never fails.
    pub fn analyze(&self, text: &str) -> SentimentOutcome {
        let tokens = self.tokenizer.tokenize(text);
        let classification = self.classifier.classify(&tokens);

        let best = classification.best();
        let best_label = best.label;
        let value = best.value;

        // Escalate only when the classifier itself leaned negative
        let sentiment = if best_label == Sentiment::Negative && self.has_urgent_keyword(&tokens) {
            Sentiment::Urgent
        } else {
            best_label
        };

        // The neutral sign follows whichever polar label scored higher,
        // with an exact tie falling to the negative side. The score always
        // uses the pre-override value.
        let score = match sentiment {
            Sentiment::Positive => 0.5 + value / 2.0,
            Sentiment::Negative | Sentiment::Urgent => -0.5 - value / 2.0,
            Sentiment::Neutral => {
                let sign = if classification.value(Sentiment::Positive)
                    > classification.value(Sentiment::Negative)
                {
                    1.0
                } else {
                    -1.0
                };
                value * 0.5 * sign
            }
        };

        SentimentOutcome {
            sentiment,
            score,
            classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_seed_classifies_positive() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("Great service, thank you!");
        assert_eq!(outcome.sentiment, Sentiment::Positive);
        assert!(outcome.score >= 0.5);
    }

    #[test]
    fn test_urgency_keyword_alone_does_not_escalate() {
        let analyzer = SentimentAnalyzer::new();

        // Clearly positive despite containing "immediately"
        let outcome = analyzer.analyze(
            "Great service, thank you for the prompt response, \
             the staff was very helpful and friendly. My issue was resolved immediately!",
        );
        assert_eq!(outcome.sentiment, Sentiment::Positive);
        assert!(outcome.score >= 0.5);
    }

    #[test]
    fn test_negative_with_keyword_escalates_to_urgent() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze(
            "Your staff was rude and unhelpful. \
             Nobody responded to my urgent emails for a week.",
        );
        assert_eq!(outcome.sentiment, Sentiment::Urgent);
        assert_eq!(outcome.classification.best().label, Sentiment::Negative);
        assert!(outcome.score <= -0.5);
    }

    #[test]
    fn test_empty_input_is_handled() {
        let analyzer = SentimentAnalyzer::new();

        // All posteriors tie at 0.25, so the first label wins
        let outcome = analyzer.analyze("");
        assert_eq!(outcome.sentiment, Sentiment::Positive);
        assert!((outcome.score - 0.625).abs() < 1e-9);
    }
}
