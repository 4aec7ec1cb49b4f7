//! Role-tier access checks.
//!
//! Authorization is tier membership, not a permission matrix: an
//! operation either requires the admin tier (role 3 or 4) or the
//! super-admin tier (role 4 only). Role identifiers are compared by
//! exact equality; there is no ordering between roles.

use onestay_core::error::AppError;
use onestay_core::types::RoleId;

/// The access tier an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTier {
    /// Admin (3) or super admin (4).
    AdminOrAbove,
    /// Super admin (4) only.
    SuperAdminOnly,
}

impl AccessTier {
    /// Whether the given role belongs to this tier.
    pub fn allows(&self, role_id: RoleId) -> bool {
        match self {
            Self::AdminOrAbove => role_id == RoleId::ADMIN || role_id == RoleId::SUPER_ADMIN,
            Self::SuperAdminOnly => role_id == RoleId::SUPER_ADMIN,
        }
    }

    /// Checks the role claim against this tier.
    ///
    /// A missing role claim is an authentication failure, not an
    /// authorization one: the token carries no usable identity tier.
    pub fn check(&self, role_id: Option<RoleId>) -> Result<(), AppError> {
        let role_id =
            role_id.ok_or_else(|| AppError::authentication("Role not found in token"))?;
        if self.allows(role_id) {
            return Ok(());
        }
        Err(AppError::authorization(match self {
            Self::AdminOrAbove => {
                "Access denied. Only administrators can access this resource"
            }
            Self::SuperAdminOnly => {
                "Access denied. Only super administrators can access this resource"
            }
        }))
    }
}
