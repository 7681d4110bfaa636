use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::sentiment::Sentiment;

/// Represents an incoming feedback submission.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct NewFeedback {
    /// The feedback text to be analyzed.
    #[validate(length(min = 1, max = 10000))]
    pub text: String,
    /// The channel the feedback arrived through (e.g., "web", "email", "kiosk").
    #[validate(length(min = 1, max = 100))]
    pub source: String,
    /// Optional contact email of the submitter.
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    /// Optional free-form category supplied by the submitter.
    #[serde(default)]
    pub category: Option<String>,
}

/// Represents a stored feedback row.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct FeedbackRecord {
    /// The unique identifier for the feedback.
    pub id: i64,
    /// The submitted feedback text.
    pub text: String,
    /// The channel the feedback arrived through.
    pub source: String,
    /// Optional contact email of the submitter.
    pub email: Option<String>,
    /// Optional category supplied by the submitter.
    pub category: Option<String>,
    /// The resolved sentiment label ("positive", "negative", "neutral", "urgent").
    pub sentiment: String,
    /// The polarity score in [-1.0, 1.0].
    pub score: f64,
    /// Timestamp of when the row was created (UTC, "YYYY-MM-DD HH:MM:SS").
    pub created_at: String,
}

/// Optional filters for listing stored feedback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackFilter {
    /// Only return feedback with this sentiment label.
    pub sentiment: Option<Sentiment>,
    /// Only return feedback from this source.
    pub source: Option<String>,
    /// Only return feedback created on or after this date (YYYY-MM-DD).
    pub start_date: Option<String>,
    /// Only return feedback created on or before this date (YYYY-MM-DD).
    pub end_date: Option<String>,
    /// Maximum number of rows to return (default 100, clamped to 1..=500).
    pub limit: Option<i64>,
    /// Number of rows to skip.
    pub offset: Option<i64>,
}

/// Response body for an accepted feedback submission.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    /// The identifier of the stored feedback row.
    pub id: i64,
    /// The resolved sentiment label.
    pub sentiment: Sentiment,
    /// The polarity score in [-1.0, 1.0].
    pub score: f64,
    /// Server-side time the submission was processed.
    pub timestamp: DateTime<Utc>,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always "ok" when the service is responding.
    pub status: String,
    /// Current server time.
    pub timestamp: DateTime<Utc>,
}

/// Overall and per-label feedback counts.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SentimentCounts {
    /// Total number of feedback rows.
    pub total: i64,
    /// Number of rows labeled positive.
    pub positive: i64,
    /// Number of rows labeled negative.
    pub negative: i64,
    /// Number of rows labeled neutral.
    pub neutral: i64,
    /// Number of rows labeled urgent.
    pub urgent: i64,
}

/// Per-source submission counts split by polarity.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct SourceBreakdown {
    /// The feedback source.
    pub source: String,
    /// Positive submissions from this source.
    pub positive: i64,
    /// Negative submissions from this source.
    pub negative: i64,
    /// Neutral submissions from this source.
    pub neutral: i64,
}

/// One month of per-label submission counts.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TrendPoint {
    /// The month in "YYYY-MM" form.
    pub date: String,
    /// Positive submissions in that month.
    pub positive: i64,
    /// Negative submissions in that month.
    pub negative: i64,
    /// Neutral submissions in that month.
    pub neutral: i64,
}

/// A recent submission as shown on the dashboard.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct RecentFeedback {
    /// The identifier of the feedback row.
    pub id: i64,
    /// The submitted feedback text.
    pub text: String,
    /// The resolved sentiment label.
    pub sentiment: String,
    /// The channel the feedback arrived through.
    pub source: String,
    /// Creation time rendered by SQLite's datetime().
    pub date: String,
}

/// How often a tracked keyword appeared across submissions.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct KeywordCount {
    /// The tracked keyword.
    pub keyword: String,
    /// Number of submissions mentioning it.
    pub count: i64,
}

/// Aggregated payload for the dashboard endpoint.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    /// Overall and per-label counts.
    pub sentiment_counts: SentimentCounts,
    /// Per-source breakdown.
    pub sources_data: Vec<SourceBreakdown>,
    /// Monthly sentiment trend.
    pub sentiment_over_time: Vec<TrendPoint>,
    /// Most recent submissions.
    pub recent_feedback: Vec<RecentFeedback>,
    /// Most frequent tracked keywords.
    pub keywords_data: Vec<KeywordCount>,
}
