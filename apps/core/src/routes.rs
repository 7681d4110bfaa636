//! HTTP Routes - API surface of the feedback service.
//!
//! ## Endpoints
//! - `GET  /api/health` - liveness probe
//! - `POST /api/feedback` - submit feedback for analysis and storage
//! - `GET  /api/feedback` - list stored feedback with optional filters
//! - `GET  /api/dashboard` - aggregated data for the dashboard
//! - `GET  /api/twitter` - recent service-related tweets

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::{info, warn, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::config::Settings;
use crate::database;
use crate::error::AppError;
use crate::keywords::KeywordExtractor;
use crate::models::{
    DashboardData, FeedbackFilter, FeedbackRecord, HealthStatus, NewFeedback, SubmissionReceipt,
};
use crate::rate_limiter::SubmissionThrottle;
use crate::sentiment::SentimentAnalyzer;
use crate::twitter::{TwitterClient, TwitterFeed};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: SqlitePool,
    /// Trained sentiment analyzer.
    pub analyzer: Arc<SentimentAnalyzer>,
    /// Tracked-keyword extractor.
    pub keywords: Arc<KeywordExtractor>,
    /// Per-client submission throttle.
    pub throttle: Arc<Mutex<SubmissionThrottle>>,
    /// Twitter client; `None` when no bearer token is configured.
    pub twitter: Option<Arc<TwitterClient>>,
}

impl AppState {
    /// Assemble the shared state from settings and an open pool.
    pub fn new(pool: SqlitePool, analyzer: SentimentAnalyzer, settings: &Settings) -> Self {
        let twitter = settings.twitter_bearer_token.as_ref().map(|token| {
            Arc::new(TwitterClient::new(
                settings.twitter_api_base.clone(),
                token.clone(),
            ))
        });

        AppState {
            pool,
            analyzer: Arc::new(analyzer),
            keywords: Arc::new(KeywordExtractor::new()),
            throttle: Arc::new(Mutex::new(SubmissionThrottle::per_minute(
                settings.rate_limit_per_minute,
            ))),
            twitter,
        }
    }
}

/// Build the application router with middleware applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/feedback", post(submit_feedback).get(list_feedback))
        .route("/api/dashboard", get(dashboard))
        .route("/api/twitter", get(twitter_feed))
        .layer(middleware::from_fn(request_tracing))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

// --- Handlers ---

pub(crate) async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}

pub(crate) async fn submit_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(feedback): Json<NewFeedback>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), AppError> {
    feedback.validate()?;

    let client = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("local")
        .to_string();

    {
        let mut throttle = state
            .throttle
            .lock()
            .map_err(|_| AppError::Internal("Submission throttle lock poisoned".to_string()))?;
        if !throttle.try_acquire(&client) {
            return Err(AppError::RateLimited);
        }
    }

    let outcome = state.analyzer.analyze(&feedback.text);
    info!(
        "Analyzed feedback from {}: {}",
        feedback.source,
        outcome.summary()
    );

    let record = database::insert_feedback(&state.pool, &feedback, &outcome).await?;

    // Keyword storage is best effort; the submission is already saved
    let keywords = state.keywords.extract(&feedback.text);
    if let Err(e) = database::insert_keywords(&state.pool, record.id, &keywords).await {
        warn!("Failed to store keywords for feedback {}: {}", record.id, e);
    }

    Ok((
        StatusCode::CREATED,
        Json(SubmissionReceipt {
            id: record.id,
            sentiment: outcome.sentiment,
            score: outcome.score,
            timestamp: Utc::now(),
        }),
    ))
}

pub(crate) async fn list_feedback(
    State(state): State<AppState>,
    Query(filter): Query<FeedbackFilter>,
) -> Result<Json<Vec<FeedbackRecord>>, AppError> {
    if let Some(ref start_date) = filter.start_date {
        NaiveDate::parse_from_str(start_date, "%Y-%m-%d")?;
    }
    if let Some(ref end_date) = filter.end_date {
        NaiveDate::parse_from_str(end_date, "%Y-%m-%d")?;
    }

    let records = database::list_feedback(&state.pool, &filter).await?;
    Ok(Json(records))
}

pub(crate) async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardData>, AppError> {
    let sentiment_counts = database::sentiment_counts(&state.pool).await?;
    let sources_data = database::source_breakdown(&state.pool).await?;
    let sentiment_over_time = database::monthly_trend(&state.pool).await?;
    let recent_feedback = database::recent_feedback(&state.pool, 5).await?;
    let keywords_data = database::top_keywords(&state.pool, 7).await?;

    Ok(Json(DashboardData {
        sentiment_counts,
        sources_data,
        sentiment_over_time,
        recent_feedback,
        keywords_data,
    }))
}

pub(crate) async fn twitter_feed(
    State(state): State<AppState>,
) -> Result<Json<TwitterFeed>, AppError> {
    let client = state
        .twitter
        .as_ref()
        .ok_or_else(|| AppError::Config("TWITTER_BEARER_TOKEN is not set".to_string()))?;

    let feed = client.search_recent().await?;
    Ok(Json(feed))
}

// --- Middleware ---

/// Answer CORS preflight and tag every response with permissive CORS headers.
async fn cors(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return (
            StatusCode::NO_CONTENT,
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
                (header::ACCESS_CONTROL_ALLOW_HEADERS, "content-type"),
            ],
        )
            .into_response();
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Wrap each request in a tracing span carrying a fresh request id.
async fn request_tracing(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let route = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        route = %route,
    );

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
