//! Request identity carrying the authenticated caller's token claims.

use serde::{Deserialize, Serialize};

use onestay_auth::{AccessTier, Claims};
use onestay_core::AppResult;
use onestay_core::types::{RoleId, UserId};

/// Identity of the current authenticated request.
///
/// Built from validated JWT claims by the API layer and passed into
/// service methods so that every operation knows *who* is acting. The
/// role is the one embedded at token issue time — a role change takes
/// effect at the next login, not mid-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestIdentity {
    /// The authenticated user's ID.
    pub subject_id: UserId,
    /// The email recorded in the token claims.
    pub email: String,
    /// The user's role at the time the JWT was issued.
    ///
    /// `None` when the token predates role support; tier checks treat
    /// that as an authentication failure, not a missing permission.
    pub role_id: Option<RoleId>,
}

impl RequestIdentity {
    /// Creates a new request identity.
    pub fn new(subject_id: UserId, email: String, role_id: Option<RoleId>) -> Self {
        Self {
            subject_id,
            email,
            role_id,
        }
    }

    /// Returns whether the caller holds the admin or super admin role.
    pub fn is_admin_or_above(&self) -> bool {
        self.role_id
            .is_some_and(|role| AccessTier::AdminOrAbove.allows(role))
    }

    /// Returns whether the caller holds the super admin role.
    pub fn is_super_admin(&self) -> bool {
        self.role_id
            .is_some_and(|role| AccessTier::SuperAdminOnly.allows(role))
    }

    /// Fails unless the caller is an admin or super admin.
    pub fn require_admin(&self) -> AppResult<()> {
        AccessTier::AdminOrAbove.check(self.role_id)
    }

    /// Fails unless the caller is a super admin.
    pub fn require_super_admin(&self) -> AppResult<()> {
        AccessTier::SuperAdminOnly.check(self.role_id)
    }
}

impl From<&Claims> for RequestIdentity {
    fn from(claims: &Claims) -> Self {
        Self {
            subject_id: claims.sub,
            email: claims.email.clone(),
            role_id: claims.role_id,
        }
    }
}
