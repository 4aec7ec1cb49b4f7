//! Database migration runner.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use onestay_core::error::{AppError, ErrorKind};
use onestay_core::result::AppResult;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Status of a single embedded migration.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationStatus {
    /// Migration version number.
    pub version: i64,
    /// Human-readable migration description.
    pub description: String,
    /// Whether the migration has been applied.
    pub applied: bool,
    /// When the migration was applied, if it was.
    pub installed_on: Option<DateTime<Utc>>,
}

/// Report every embedded migration and whether it has been applied.
///
/// The ledger table does not exist before the first migration run, so its
/// absence is treated as "nothing applied yet" rather than an error.
pub async fn migration_status(pool: &PgPool) -> AppResult<Vec<MigrationStatus>> {
    let ledger_exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM information_schema.tables \
         WHERE table_name = '_sqlx_migrations')",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to check migration ledger", e)
    })?;

    let applied: Vec<(i64, DateTime<Utc>)> = if ledger_exists {
        sqlx::query_as(
            "SELECT version, installed_on FROM _sqlx_migrations \
             WHERE success ORDER BY version",
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read migration ledger", e)
        })?
    } else {
        Vec::new()
    };

    Ok(sqlx::migrate!("../../migrations")
        .iter()
        .map(|m| {
            let installed_on = applied
                .iter()
                .find(|(version, _)| *version == m.version)
                .map(|(_, at)| *at);
            MigrationStatus {
                version: m.version,
                description: m.description.to_string(),
                applied: installed_on.is_some(),
                installed_on,
            }
        })
        .collect())
}
