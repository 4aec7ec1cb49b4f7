//! Role management — listing, creation, and guarded deletion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use onestay_core::AppResult;
use onestay_core::error::AppError;
use onestay_core::types::RoleId;
use onestay_database::repositories::RoleRepository;
use onestay_entity::role::{CreateRole, Role};

use crate::context::RequestIdentity;

/// Manages authorization roles.
#[derive(Debug, Clone)]
pub struct RoleService {
    /// Role repository.
    role_repo: Arc<RoleRepository>,
}

/// Request to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    /// Human-readable name.
    pub name: String,
    /// Machine slug (unique).
    pub slug: String,
}

impl RoleService {
    /// Creates a new role service.
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self { role_repo }
    }

    /// Lists all roles (admin only).
    pub async fn list(&self, identity: &RequestIdentity) -> AppResult<Vec<Role>> {
        identity.require_admin()?;
        self.role_repo.find_all().await
    }

    /// Creates a new role (super admin only). The id comes from the
    /// database sequence.
    pub async fn create(
        &self,
        identity: &RequestIdentity,
        req: CreateRoleRequest,
    ) -> AppResult<Role> {
        identity.require_super_admin()?;

        if req.name.trim().is_empty() || req.slug.trim().is_empty() {
            return Err(AppError::validation("Role name and slug are required"));
        }

        let role = self
            .role_repo
            .create(&CreateRole {
                name: req.name,
                slug: req.slug,
            })
            .await?;

        info!(
            admin_id = %identity.subject_id,
            role_id = %role.id,
            slug = %role.slug,
            "Role created"
        );

        Ok(role)
    }

    /// Deletes a role (super admin only). The four built-in roles are
    /// never deletable.
    pub async fn delete(&self, identity: &RequestIdentity, role_id: RoleId) -> AppResult<()> {
        identity.require_super_admin()?;

        if role_id.is_reserved() {
            return Err(AppError::authorization("Cannot delete a system role"));
        }

        self.role_repo.delete(role_id).await?;
        info!(admin_id = %identity.subject_id, role_id = %role_id, "Role deleted");
        Ok(())
    }
}
