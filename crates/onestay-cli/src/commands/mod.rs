//! CLI command definitions and dispatch.

pub mod migrate;
pub mod roles;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use onestay_core::error::AppError;

/// OneStay — Property Rental Platform
#[derive(Debug, Parser)]
#[command(name = "onestay", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml overlay)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the OneStay server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Role management
    Roles(roles::RolesArgs),
    /// User management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env, self.format).await,
            Commands::Roles(args) => roles::execute(args, &self.env, self.format).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the given environment
pub fn load_config(env: &str) -> Result<onestay_core::config::AppConfig, AppError> {
    onestay_core::config::AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &onestay_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = onestay_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
