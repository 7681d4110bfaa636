//! Test Module
//!
//! Comprehensive test suite for the Pulseboard backend.
//!
//! ## Test Categories
//! - `sentiment_tests`: Classification, urgency override, polarity scores
//! - `database_tests`: Feedback storage, filtering, dashboard aggregates
//! - `api_tests`: Handler behavior, validation, rate limiting, error mapping
//! - `twitter_tests`: Twitter client against a mock upstream

pub mod sentiment_tests;
