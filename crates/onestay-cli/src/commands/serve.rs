//! Start the OneStay server.

use clap::Args;

use onestay_core::error::AppError;
use onestay_database::DatabasePool;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long, default_value = "true")]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting OneStay server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let db = DatabasePool::connect(&config.database).await?;

    if args.auto_migrate {
        println!("Running database migrations...");
        onestay_database::migration::run_migrations(db.pool()).await?;
        onestay_database::seed::seed_roles(db.pool()).await?;
        println!("  Migrations applied successfully.");
    }

    onestay_api::run_server(config, db).await
}
