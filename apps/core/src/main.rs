// Pulseboard V1 Backend Entry Point
// Feedback intake, sentiment classification, and dashboard aggregation

mod config;
mod database;
mod error;
mod keywords;
mod models;
mod rate_limiter;
mod routes;
mod sentiment;
mod telemetry;
mod twitter;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use config::Settings;
use routes::AppState;
use sentiment::SentimentAnalyzer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_telemetry("pulseboard-core", "info");

    let settings = Settings::from_env().context("Failed to load settings")?;

    let pool = database::init_db(&settings.database_path)
        .await
        .context("Failed to initialize database")?;

    // Trains from the seed corpus; the model never changes after this point
    let analyzer = SentimentAnalyzer::new();

    let state = AppState::new(pool.clone(), analyzer, &settings);
    let app = routes::build_router(state);

    let bind_address = settings.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Server running on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Database connection closed");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            // Never resolve here; returning would stop the server immediately
            std::future::pending::<()>().await;
        }
    }
}
