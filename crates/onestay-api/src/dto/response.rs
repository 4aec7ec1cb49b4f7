//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use onestay_core::types::{RoleId, UserId};
use onestay_entity::role::Role;
use onestay_entity::user::User;
use onestay_service::UserWithRole;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Role summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Role ID.
    pub id: RoleId,
    /// Role name.
    pub name: String,
    /// Role slug.
    pub slug: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            slug: role.slug,
        }
    }
}

/// User summary for responses.
///
/// The password hash never appears here. A dangling role id renders as
/// an "unknown" placeholder rather than failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Assigned role.
    pub role: RoleResponse,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last update.
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    /// Builds a response from a user and their (possibly missing) role.
    pub fn from_parts(user: User, role: Option<Role>) -> Self {
        let role = role
            .map(RoleResponse::from)
            .unwrap_or_else(|| RoleResponse {
                id: user.role_id,
                name: "Unknown role".to_string(),
                slug: "unknown".to_string(),
            });

        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserWithRole> for UserResponse {
    fn from(with_role: UserWithRole) -> Self {
        Self::from_parts(with_role.user, with_role.role)
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: UserId::from_uuid(Uuid::new_v4()),
            first_name: "Marie".to_string(),
            last_name: "Durand".to_string(),
            email: "marie@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role_id: RoleId::LOUEUR,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_response_never_carries_hash() {
        let response = UserResponse::from_parts(sample_user(), None);
        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_missing_role_renders_placeholder() {
        let response = UserResponse::from_parts(sample_user(), None);
        assert_eq!(response.role.id, RoleId::LOUEUR);
        assert_eq!(response.role.name, "Unknown role");
        assert_eq!(response.role.slug, "unknown");
    }

    #[test]
    fn test_present_role_is_used() {
        let role = Role {
            id: RoleId::ADMIN,
            name: "Administrator".to_string(),
            slug: "admin".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let mut user = sample_user();
        user.role_id = RoleId::ADMIN;

        let response = UserResponse::from_parts(user, Some(role));
        assert_eq!(response.role.name, "Administrator");
        assert_eq!(response.role.slug, "admin");
    }
}
