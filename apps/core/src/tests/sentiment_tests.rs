//! Sentiment Module Tests
//!
//! End-to-end tests for the trained analyzer: label resolution, the
//! urgency override, and polarity score behavior.

use crate::sentiment::{Sentiment, SentimentAnalyzer};

#[cfg(test)]
mod label_tests {
    use super::*;

    #[test]
    fn test_positive_feedback() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("Great service, thank you!");
        assert_eq!(outcome.sentiment, Sentiment::Positive);
        assert!(outcome.score >= 0.5);
        assert!(outcome.score <= 1.0);
    }

    #[test]
    fn test_negative_feedback() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("The wait time was unacceptable.");
        assert_eq!(outcome.sentiment, Sentiment::Negative);
        assert!(outcome.score <= -0.5);
        assert!(outcome.score >= -1.0);
    }

    #[test]
    fn test_urgent_feedback_without_override() {
        let analyzer = SentimentAnalyzer::new();

        // The classifier itself resolves this as urgent; no escalation involved
        let outcome =
            analyzer.analyze("There is a gas leak in our building! Please send someone immediately!");
        assert_eq!(outcome.sentiment, Sentiment::Urgent);
        assert_eq!(outcome.classification.best().label, Sentiment::Urgent);
        assert!(outcome.score <= -0.5);
    }

    #[test]
    fn test_urgent_contraction_variant() {
        let analyzer = SentimentAnalyzer::new();

        // One token off the seed text ("There's" against "There is")
        let outcome =
            analyzer.analyze("There's a gas leak in our building! Please send someone immediately!");
        assert_eq!(outcome.sentiment, Sentiment::Urgent);
        assert!(outcome.score <= -0.5);
    }

    #[test]
    fn test_urgent_phrasing_outside_the_corpus() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer
            .analyze("There is a dangerous gas leak in the building, please send help immediately!");
        assert_eq!(outcome.sentiment, Sentiment::Urgent);
    }

    #[test]
    fn test_neutral_question_leaning_negative() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("What are your office hours?");
        assert_eq!(outcome.sentiment, Sentiment::Neutral);
        assert!(outcome.score.abs() < 0.5);
        // Negative joint outweighs positive here, so the sign is negative
        assert!(outcome.score < 0.0);
    }

    #[test]
    fn test_neutral_statement_leaning_positive() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("I need information about renewing my license.");
        assert_eq!(outcome.sentiment, Sentiment::Neutral);
        assert!(outcome.score > 0.0);
        assert!(outcome.score < 0.5);
    }
}

#[cfg(test)]
mod override_tests {
    use super::*;

    #[test]
    fn test_override_reports_the_negative_classification() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze(
            "Your staff was rude and unhelpful. Nobody responded to my urgent emails for a week.",
        );
        // The label is escalated but the classification itself stays negative
        assert_eq!(outcome.sentiment, Sentiment::Urgent);
        assert_eq!(outcome.classification.best().label, Sentiment::Negative);

        // The score is derived from the pre-override best value
        let best_value = outcome.classification.best().value;
        assert!((outcome.score - (-0.5 - best_value / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_every_keyword_escalates_bad_feedback() {
        let analyzer = SentimentAnalyzer::new();

        for keyword in [
            "urgent",
            "emergency",
            "dangerous",
            "hazard",
            "immediately",
            "critical",
        ] {
            let text = format!("The staff was rude and unhelpful, this is {}.", keyword);
            let outcome = analyzer.analyze(&text);
            assert_eq!(
                outcome.sentiment,
                Sentiment::Urgent,
                "Expected urgent for keyword '{}'",
                keyword
            );
        }
    }

    #[test]
    fn test_keyword_casing_does_not_matter() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("The staff was rude and unhelpful, this is URGENT.");
        assert_eq!(outcome.sentiment, Sentiment::Urgent);
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn test_score_stays_in_band_per_label() {
        let analyzer = SentimentAnalyzer::new();

        let inputs = [
            "Great service, thank you!",
            "The wait time was unacceptable.",
            "What are your office hours?",
            "The elevator in city hall is stuck with people inside!",
            "completely out of vocabulary words xylophone quartz",
            "!!! ???",
            "",
        ];

        for input in inputs {
            let outcome = analyzer.analyze(input);
            assert!(
                (-1.0..=1.0).contains(&outcome.score),
                "Score out of range for '{}': {}",
                input,
                outcome.score
            );
            match outcome.sentiment {
                Sentiment::Positive => assert!(outcome.score >= 0.5),
                Sentiment::Negative | Sentiment::Urgent => assert!(outcome.score <= -0.5),
                Sentiment::Neutral => assert!(outcome.score.abs() < 0.5),
            }
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = SentimentAnalyzer::new();
        let text = "The staff was very helpful and the process was easy.";

        let first = analyzer.analyze(text);
        let second = analyzer.analyze(text);
        assert_eq!(first.sentiment, second.sentiment);
        assert_eq!(first.score.to_bits(), second.score.to_bits());
    }

    #[test]
    fn test_normalized_values_sum_to_one() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("I submitted my application last week.");
        let scores = outcome.classification.scores();
        assert_eq!(scores.len(), 4);

        let sum: f64 = scores.iter().map(|s| s.value).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for score in scores {
            assert!(score.value >= 0.0);
            assert!(score.value <= 1.0);
        }
    }

    #[test]
    fn test_values_are_reported_in_label_order() {
        let analyzer = SentimentAnalyzer::new();

        let outcome = analyzer.analyze("The website is down again.");
        let labels: Vec<Sentiment> = outcome
            .classification
            .scores()
            .iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, Sentiment::ALL);

        let best = outcome.classification.best();
        assert!((outcome.classification.value(best.label) - best.value).abs() < 1e-12);
    }
}
