//! Matchup Predictor entry point.
//!
//! Loads configuration, initialises structured logging, reads the season
//! table once and serves the dashboard until Ctrl+C.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use matchup::config::AppConfig;
use matchup::dashboard::{self, DashboardState};
use matchup::data::Dataset;

/// Environment variable that points at an alternative config file.
const CONFIG_ENV: &str = "MATCHUP_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "config.toml".to_string());
    let cfg = if std::path::Path::new(&config_path).exists() {
        AppConfig::load(&config_path)?
    } else {
        info!(path = %config_path, "No config file found, using defaults");
        AppConfig::default()
    };

    let dataset_path = cfg.dataset_path();
    let dataset = Dataset::load(&dataset_path)
        .with_context(|| format!("Cannot start without the season table at {dataset_path}"))?;

    info!(
        teams = dataset.len(),
        default_mode = %cfg.rating.default_mode,
        default_metric = %cfg.rating.default_metric,
        "Matchup Predictor starting up"
    );

    let state = Arc::new(DashboardState::new(Arc::new(dataset), cfg.rating.clone()));
    dashboard::serve(state, &cfg.dashboard.host, cfg.dashboard.port, shutdown_signal()).await?;

    info!("Matchup Predictor shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received."),
        Err(e) => {
            warn!(error = %e, "Cannot listen for Ctrl+C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("matchup=info"));

    let json_logging = std::env::var("MATCHUP_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
