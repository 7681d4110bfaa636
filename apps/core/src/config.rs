//! Application Settings - Environment-driven configuration.
//!
//! All settings have working defaults so the service starts with no
//! environment at all. Values are read once at startup; `.env` files are
//! loaded before this runs.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address to bind the HTTP listener to.
    pub host: String,
    /// Port to bind the HTTP listener to.
    pub port: u16,
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
    /// Feedback submissions allowed per client per minute.
    pub rate_limit_per_minute: usize,
    /// Bearer token for the Twitter API; the feed endpoint is disabled without it.
    pub twitter_bearer_token: Option<String>,
    /// Base URL for the Twitter API.
    pub twitter_api_base: String,
}

impl Settings {
    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::Config(format!("PORT is not a valid port number: {}", raw))
            })?,
            Err(_) => 3000,
        };

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/feedback.sqlite"));

        let rate_limit_per_minute = match env::var("RATE_LIMIT_PER_MINUTE") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::Config(format!(
                    "RATE_LIMIT_PER_MINUTE is not a valid number: {}",
                    raw
                ))
            })?,
            Err(_) => 30,
        };

        // An empty or blank token means "not configured"
        let twitter_bearer_token = env::var("TWITTER_BEARER_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let twitter_api_base =
            env::var("TWITTER_API_BASE").unwrap_or_else(|_| "https://api.twitter.com".to_string());

        Ok(Settings {
            host,
            port,
            database_path,
            rate_limit_per_minute,
            twitter_bearer_token,
            twitter_api_base,
        })
    }

    /// The address string for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
