//! RBAC helpers for role-tier route guarding.
//!
//! Handlers for administrative routes reject early with these checks; the
//! services repeat them so no caller can bypass a tier by reaching a
//! service through another path.

use onestay_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the caller is admin or above.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    auth.require_admin()
}

/// Checks that the caller is a super administrator.
pub fn require_super_admin(auth: &AuthUser) -> Result<(), AppError> {
    auth.require_super_admin()
}
