use crate::models::{
    FeedbackFilter, FeedbackRecord, KeywordCount, NewFeedback, RecentFeedback, SentimentCounts,
    SourceBreakdown, TrendPoint,
};
use crate::sentiment::SentimentOutcome;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

pub async fn init_db(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let db_url = format!("sqlite://{}", db_path.to_string_lossy());
    info!("Initializing database at: {}", db_url);

    let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS feedback (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            source TEXT NOT NULL,
            email TEXT,
            category TEXT,
            sentiment TEXT NOT NULL,
            score REAL NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS keywords (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            feedback_id INTEGER,
            keyword TEXT NOT NULL,
            FOREIGN KEY (feedback_id) REFERENCES feedback (id)
        )
        "#,
    )
    .execute(&pool)
    .await?;

    info!("Database tables initialized");

    Ok(pool)
}

// --- Feedback ---

pub async fn insert_feedback(
    pool: &SqlitePool,
    feedback: &NewFeedback,
    outcome: &SentimentOutcome,
) -> Result<FeedbackRecord, sqlx::Error> {
    sqlx::query_as::<_, FeedbackRecord>(
        r#"
        INSERT INTO feedback (text, source, email, category, sentiment, score)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, text, source, email, category, sentiment, score, created_at
        "#,
    )
    .bind(&feedback.text)
    .bind(&feedback.source)
    .bind(feedback.email.as_deref())
    .bind(feedback.category.as_deref())
    .bind(outcome.sentiment.label())
    .bind(outcome.score)
    .fetch_one(pool)
    .await
}

pub async fn insert_keywords(
    pool: &SqlitePool,
    feedback_id: i64,
    keywords: &[String],
) -> Result<(), sqlx::Error> {
    for keyword in keywords {
        sqlx::query("INSERT INTO keywords (feedback_id, keyword) VALUES (?, ?)")
            .bind(feedback_id)
            .bind(keyword)
            .execute(pool)
            .await?;
    }
    Ok(())
}

pub async fn list_feedback(
    pool: &SqlitePool,
    filter: &FeedbackFilter,
) -> Result<Vec<FeedbackRecord>, sqlx::Error> {
    let mut query: sqlx::QueryBuilder<sqlx::Sqlite> = sqlx::QueryBuilder::new(
        "SELECT id, text, source, email, category, sentiment, score, created_at \
         FROM feedback WHERE 1=1",
    );

    if let Some(sentiment) = filter.sentiment {
        query.push(" AND sentiment = ").push_bind(sentiment.label());
    }
    if let Some(ref source) = filter.source {
        query.push(" AND source = ").push_bind(source.as_str());
    }
    if let Some(ref start_date) = filter.start_date {
        query
            .push(" AND created_at >= ")
            .push_bind(start_date.as_str());
    }
    if let Some(ref end_date) = filter.end_date {
        query.push(" AND created_at <= ").push_bind(end_date.as_str());
    }

    let limit = filter.limit.unwrap_or(100).clamp(1, 500);
    let offset = filter.offset.unwrap_or(0).max(0);
    query.push(" ORDER BY created_at DESC LIMIT ").push_bind(limit);
    query.push(" OFFSET ").push_bind(offset);

    query
        .build_query_as::<FeedbackRecord>()
        .fetch_all(pool)
        .await
}

// --- Dashboard aggregates ---

pub async fn sentiment_counts(pool: &SqlitePool) -> Result<SentimentCounts, sqlx::Error> {
    sqlx::query_as::<_, SentimentCounts>(
        r#"
        SELECT
            COUNT(*) AS total,
            COALESCE(SUM(CASE WHEN sentiment = 'positive' THEN 1 ELSE 0 END), 0) AS positive,
            COALESCE(SUM(CASE WHEN sentiment = 'negative' THEN 1 ELSE 0 END), 0) AS negative,
            COALESCE(SUM(CASE WHEN sentiment = 'neutral' THEN 1 ELSE 0 END), 0) AS neutral,
            COALESCE(SUM(CASE WHEN sentiment = 'urgent' THEN 1 ELSE 0 END), 0) AS urgent
        FROM feedback
        "#,
    )
    .fetch_one(pool)
    .await
}

pub async fn source_breakdown(pool: &SqlitePool) -> Result<Vec<SourceBreakdown>, sqlx::Error> {
    sqlx::query_as::<_, SourceBreakdown>(
        r#"
        SELECT
            source,
            SUM(CASE WHEN sentiment = 'positive' THEN 1 ELSE 0 END) AS positive,
            SUM(CASE WHEN sentiment = 'negative' THEN 1 ELSE 0 END) AS negative,
            SUM(CASE WHEN sentiment = 'neutral' THEN 1 ELSE 0 END) AS neutral
        FROM feedback
        GROUP BY source
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn monthly_trend(pool: &SqlitePool) -> Result<Vec<TrendPoint>, sqlx::Error> {
    sqlx::query_as::<_, TrendPoint>(
        r#"
        SELECT
            strftime('%Y-%m', created_at) AS date,
            SUM(CASE WHEN sentiment = 'positive' THEN 1 ELSE 0 END) AS positive,
            SUM(CASE WHEN sentiment = 'negative' THEN 1 ELSE 0 END) AS negative,
            SUM(CASE WHEN sentiment = 'neutral' THEN 1 ELSE 0 END) AS neutral
        FROM feedback
        GROUP BY date
        ORDER BY date
        LIMIT 6
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn recent_feedback(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<RecentFeedback>, sqlx::Error> {
    sqlx::query_as::<_, RecentFeedback>(
        r#"
        SELECT id, text, sentiment, source, datetime(created_at) AS date
        FROM feedback
        ORDER BY created_at DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn top_keywords(pool: &SqlitePool, limit: i64) -> Result<Vec<KeywordCount>, sqlx::Error> {
    sqlx::query_as::<_, KeywordCount>(
        r#"
        SELECT keyword, COUNT(*) AS count
        FROM keywords
        GROUP BY keyword
        ORDER BY count DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
