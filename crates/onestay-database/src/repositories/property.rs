//! Property repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;

use onestay_core::error::{AppError, ErrorKind};
use onestay_core::result::AppResult;
use onestay_core::types::pagination::{PageRequest, PageResponse};
use onestay_core::types::{PropertyId, UserId};
use onestay_entity::property::{CreateProperty, Property, PropertyStatus};

/// Unique constraint on the global slug.
const SLUG_CONSTRAINT: &str = "properties_slug_key";
/// Unique constraint on (host, name).
const HOST_NAME_CONSTRAINT: &str = "properties_host_id_name_key";

/// Outcome of a property write that allocates or changes a slug.
///
/// A slug collision is a retry trigger for the caller, which re-allocates
/// and writes again; it is never surfaced to the client directly.
#[derive(Debug)]
pub enum PropertyWrite {
    /// The row was written.
    Written(Property),
    /// Another property claimed the slug concurrently.
    SlugConflict,
}

/// Repository for property CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a property by primary key.
    pub async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find property by id", e)
            })
    }

    /// Find a property by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find property by slug", e)
            })
    }

    /// Whether any property already uses the given slug.
    pub async fn exists_by_slug(&self, slug: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM properties WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check slug existence", e)
            })
    }

    /// Whether the host already has a property with the given name.
    pub async fn exists_by_name_for_host(&self, host_id: UserId, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM properties WHERE host_id = $1 AND name = $2)",
        )
        .bind(host_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check name existence", e)
        })
    }

    /// List published properties, newest first, with pagination.
    pub async fn find_published(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE status = $1")
                .bind(PropertyStatus::Published)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count properties", e)
                })?;

        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties WHERE status = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(PropertyStatus::Published)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list properties", e)
        })?;

        Ok(PageResponse::new(
            properties,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List a host's properties, optionally restricted to published ones.
    pub async fn find_by_host(
        &self,
        host_id: UserId,
        include_drafts: bool,
    ) -> AppResult<Vec<Property>> {
        let query = if include_drafts {
            sqlx::query_as::<_, Property>(
                "SELECT * FROM properties WHERE host_id = $1 ORDER BY created_at DESC",
            )
            .bind(host_id)
        } else {
            sqlx::query_as::<_, Property>(
                "SELECT * FROM properties WHERE host_id = $1 AND status = $2 \
                 ORDER BY created_at DESC",
            )
            .bind(host_id)
            .bind(PropertyStatus::Published)
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list host properties", e)
        })
    }

    /// Insert a new property as a draft.
    pub async fn insert(&self, data: &CreateProperty) -> AppResult<PropertyWrite> {
        let result = sqlx::query_as::<_, Property>(
            "INSERT INTO properties \
             (host_id, name, slug, description, address, city, country, zip_code, images, guide) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(data.host_id)
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.country)
        .bind(&data.zip_code)
        .bind(Json(&data.images))
        .bind(Json(&data.guide))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(property) => Ok(PropertyWrite::Written(property)),
            Err(e) => match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some(SLUG_CONSTRAINT) =>
                {
                    Ok(PropertyWrite::SlugConflict)
                }
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some(HOST_NAME_CONSTRAINT) =>
                {
                    Err(AppError::conflict(
                        "You already have a property with this name",
                    ))
                }
                _ => Err(AppError::with_source(
                    ErrorKind::Database,
                    "Failed to create property",
                    e,
                )),
            },
        }
    }

    /// Update a property row in full.
    pub async fn update(&self, property: &Property) -> AppResult<PropertyWrite> {
        let result = sqlx::query_as::<_, Property>(
            "UPDATE properties SET name = $2, slug = $3, description = $4, address = $5, \
                                   city = $6, country = $7, zip_code = $8, status = $9, \
                                   images = $10, guide = $11, published_at = $12, \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(property.id)
        .bind(&property.name)
        .bind(&property.slug)
        .bind(&property.description)
        .bind(&property.address)
        .bind(&property.city)
        .bind(&property.country)
        .bind(&property.zip_code)
        .bind(property.status)
        .bind(&property.images)
        .bind(&property.guide)
        .bind(property.published_at)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(property)) => Ok(PropertyWrite::Written(property)),
            Ok(None) => Err(AppError::not_found(format!(
                "Property {} not found",
                property.id
            ))),
            Err(e) => match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some(SLUG_CONSTRAINT) =>
                {
                    Ok(PropertyWrite::SlugConflict)
                }
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some(HOST_NAME_CONSTRAINT) =>
                {
                    Err(AppError::conflict(
                        "You already have a property with this name",
                    ))
                }
                _ => Err(AppError::with_source(
                    ErrorKind::Database,
                    "Failed to update property",
                    e,
                )),
            },
        }
    }

    /// Mark a property as published.
    pub async fn publish(&self, id: PropertyId) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET status = $2, published_at = NOW(), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(PropertyStatus::Published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to publish property", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Property {id} not found")))
    }

    /// Delete a property by primary key.
    pub async fn delete(&self, id: PropertyId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete property", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Property {id} not found")));
        }
        Ok(())
    }
}
