//! Role entity model.
//!
//! Four roles are built in and always present: client (1), loueur (2),
//! admin (3), and super admin (4). Additional roles can be created by a
//! super administrator and receive database-assigned identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use onestay_core::types::RoleId;

/// A role assignable to users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier, assigned by the database.
    pub id: RoleId,
    /// Human-readable role name.
    pub name: String,
    /// URL-safe unique role slug.
    pub slug: String,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Whether this is one of the built-in roles that can never be deleted.
    pub fn is_reserved(&self) -> bool {
        self.id.is_reserved()
    }
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    /// Human-readable role name.
    pub name: String,
    /// URL-safe unique role slug.
    pub slug: String,
}

/// Definition of a built-in role, used for seeding.
#[derive(Debug, Clone, Copy)]
pub struct ReservedRole {
    /// Fixed identifier.
    pub id: RoleId,
    /// Display name.
    pub name: &'static str,
    /// Unique slug.
    pub slug: &'static str,
}

/// The four built-in roles, in identifier order.
pub const RESERVED_ROLES: [ReservedRole; 4] = [
    ReservedRole {
        id: RoleId::CLIENT,
        name: "Client",
        slug: "client",
    },
    ReservedRole {
        id: RoleId::LOUEUR,
        name: "Loueur",
        slug: "loueur",
    },
    ReservedRole {
        id: RoleId::ADMIN,
        name: "Admin",
        slug: "admin",
    },
    ReservedRole {
        id: RoleId::SUPER_ADMIN,
        name: "Super Admin",
        slug: "superadmin",
    },
];
