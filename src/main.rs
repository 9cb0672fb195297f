//! Cuti Server: HR leave-management REST API.
//!
//! Main entry point that loads configuration, prepares the database and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use cuti_core::config::{AppConfig, LogFormat};
use cuti_core::error::AppError;
use cuti_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `CUTI_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CUTI_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Cuti");

    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    cuti_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    cuti_api::run_server(config, db).await
}
