//! Twitter Feed - Recent-mention search against the Twitter v2 API.
//!
//! A thin typed client over reqwest. The base URL is injectable so tests
//! can point it at a local mock server.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;

/// Search query for service-related mentions
const SEARCH_QUERY: &str = "customer service OR feedback OR support";
/// Number of tweets to request per call
const MAX_RESULTS: u32 = 10;

/// A single tweet from the v2 search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    /// The tweet identifier.
    pub id: String,
    /// The tweet text.
    pub text: String,
    /// Creation time as reported by Twitter.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Identifier of the author.
    #[serde(default)]
    pub author_id: Option<String>,
}

/// Response payload of the recent-search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterFeed {
    /// Matching tweets; the field is absent upstream when there are none.
    #[serde(default)]
    pub data: Vec<Tweet>,
    /// Pagination metadata, passed through untouched.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// Client for the Twitter v2 recent-search endpoint.
pub struct TwitterClient {
    http: Client,
    base_url: String,
    bearer_token: String,
}

impl TwitterClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        TwitterClient {
            http: Client::new(),
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
        }
    }

    /// Fetch recent tweets mentioning customer service topics.
    pub async fn search_recent(&self) -> Result<TwitterFeed, AppError> {
        let url = format!("{}/2/tweets/search/recent", self.base_url);
        let max_results = MAX_RESULTS.to_string();

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .query(&[
                ("query", SEARCH_QUERY),
                ("max_results", max_results.as_str()),
                ("tweet.fields", "created_at,author_id,text"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Twitter API returned status {}",
                response.status()
            )));
        }

        let feed = response.json::<TwitterFeed>().await?;
        info!("Fetched {} tweets", feed.data.len());
        Ok(feed)
    }
}
