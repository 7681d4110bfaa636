//! # Sentiment Module
//!
//! Naive Bayes sentiment classification for incoming feedback. The model
//! is trained once from a hand-written seed corpus when the analyzer is
//! constructed and is shared read-only across requests.
//!
//! ## Components
//! - **tokenizer**: Regex word tokenizer, case preserving
//! - **classifier**: Multinomial Naive Bayes with Laplace smoothing
//! - **analyzer**: Orchestrator applying the urgency override and polarity score
//! - **outcome**: Final result handed to storage and API responses

pub mod analyzer;
pub mod classifier;
pub mod outcome;
pub mod tokenizer;

pub use analyzer::SentimentAnalyzer;
pub use classifier::Sentiment;
pub use outcome::SentimentOutcome;
