//! OneStay Server — Property Rental Platform
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use onestay_core::config::AppConfig;
use onestay_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `ONESTAY_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("ONESTAY_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
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
    tracing::info!("Starting OneStay v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.uses_insecure_secret() {
        tracing::warn!(
            "auth.jwt_secret is the built-in placeholder; set a real secret before exposing this server"
        );
    }

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = onestay_database::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    onestay_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Seed built-in roles ──────────────────────────────
    onestay_database::seed::seed_roles(db.pool()).await?;

    // ── Step 3: Start HTTP server ────────────────────────────────
    onestay_api::run_server(config, db).await
}
