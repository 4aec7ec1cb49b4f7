//! Login and token issuance.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use onestay_auth::{IssuedToken, JwtEncoder, PasswordHasher};
use onestay_core::AppResult;
use onestay_core::error::AppError;
use onestay_database::repositories::{RoleRepository, UserRepository};
use onestay_entity::role::Role;
use onestay_entity::user::User;

/// Rejection shared by unknown email and wrong password so that a probe
/// cannot distinguish the two.
const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Handles credential verification and JWT issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Role repository, for resolving the role in the login response.
    role_repo: Arc<RoleRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The signed token and its expiry.
    pub token: IssuedToken,
    /// The authenticated user.
    pub user: User,
    /// The user's role, when its row still exists.
    pub role: Option<Role>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        role_repo: Arc<RoleRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            hasher,
            encoder,
        }
    }

    /// Verifies the given credentials and issues a token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            debug!(email = %email, "Login rejected: unknown email");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        let token = self.encoder.issue(user.id, user.role_id, &user.email)?;
        let role = self.role_repo.find_by_id(user.role_id).await?;

        info!(user_id = %user.id, role_id = %user.role_id, "User logged in");

        Ok(LoginOutcome { token, user, role })
    }
}
