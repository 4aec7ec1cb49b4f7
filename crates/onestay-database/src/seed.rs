//! Built-in role seeding.

use sqlx::PgPool;
use tracing::{debug, info};

use onestay_core::error::{AppError, ErrorKind};
use onestay_core::result::AppResult;
use onestay_entity::role::RESERVED_ROLES;

/// Insert the four built-in roles if they are missing.
///
/// Idempotent, keyed on the role slug: a role whose slug already exists
/// is left untouched. The role identity sequence is advanced past the
/// fixed identifiers so that roles created later through the API never
/// collide with them.
pub async fn seed_roles(pool: &PgPool) -> AppResult<()> {
    for role in RESERVED_ROLES {
        let result = sqlx::query(
            "INSERT INTO roles (id, name, slug) VALUES ($1, $2, $3) ON CONFLICT (slug) DO NOTHING",
        )
        .bind(role.id)
        .bind(role.name)
        .bind(role.slug)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to seed role '{}'", role.slug),
                e,
            )
        })?;

        if result.rows_affected() > 0 {
            info!(id = %role.id, slug = role.slug, "Created built-in role");
        } else {
            debug!(id = %role.id, slug = role.slug, "Built-in role already present");
        }
    }

    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('roles', 'id'), \
                (SELECT GREATEST(COALESCE(MAX(id), 4), 4) FROM roles))",
    )
    .execute(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to advance role sequence", e)
    })?;

    Ok(())
}

/// Delete every role no user references, then reinsert missing built-ins.
///
/// Roles still assigned to users survive the reset because of the
/// `users_role_id_fkey` constraint. Returns the number of deleted roles.
pub async fn reset_roles(pool: &PgPool) -> AppResult<u64> {
    let result =
        sqlx::query("DELETE FROM roles WHERE id NOT IN (SELECT role_id FROM users)")
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete roles", e)
            })?;

    let deleted = result.rows_affected();
    info!(deleted, "Cleared unreferenced roles");

    seed_roles(pool).await?;
    Ok(deleted)
}
