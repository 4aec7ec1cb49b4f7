//! User account management — registration, listing, profiles, admin edits.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use onestay_auth::{PasswordHasher, PasswordPolicy};
use onestay_core::AppResult;
use onestay_core::error::AppError;
use onestay_core::types::{PageRequest, PageResponse, RoleId, UserId};
use onestay_database::repositories::{RoleRepository, UserRepository};
use onestay_entity::role::Role;
use onestay_entity::user::{CreateUser, UpdateUser, User};

use crate::context::RequestIdentity;

/// Handles user accounts: admin-gated registration and management plus
/// self-service profile access.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Role repository.
    role_repo: Arc<RoleRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    policy: Arc<PasswordPolicy>,
}

/// A user together with their resolved role.
///
/// `role` is `None` when the role row has gone missing; callers render a
/// fallback instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRole {
    /// The user record.
    pub user: User,
    /// The user's role, if its row still exists.
    pub role: Option<Role>,
}

/// Request to register a new user (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email (unique).
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Role assignment; must reference an existing role.
    pub role_id: RoleId,
}

/// Request to update one's own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New password.
    pub password: Option<String>,
}

/// Request to update any user (admin). Same fields as a profile update
/// plus the role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUpdateUserRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New password.
    pub password: Option<String>,
    /// New role; must reference an existing role.
    pub role_id: Option<RoleId>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        role_repo: Arc<RoleRepository>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            hasher,
            policy,
        }
    }

    /// Registers a new user account (admin only).
    pub async fn register(
        &self,
        identity: &RequestIdentity,
        req: RegisterUserRequest,
    ) -> AppResult<UserWithRole> {
        identity.require_admin()?;

        if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }
        if req.email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let Some(role) = self.role_repo.find_by_id(req.role_id).await? else {
            return Err(AppError::validation(format!(
                "Role {} not found",
                req.role_id
            )));
        };

        self.policy.validate(&req.password)?;
        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password_hash,
                role_id: req.role_id,
            })
            .await?;

        info!(
            admin_id = %identity.subject_id,
            new_user_id = %user.id,
            role_id = %user.role_id,
            "User registered by admin"
        );

        Ok(UserWithRole {
            user,
            role: Some(role),
        })
    }

    /// Lists all users with their roles (admin only).
    pub async fn list(
        &self,
        identity: &RequestIdentity,
        page: PageRequest,
    ) -> AppResult<PageResponse<UserWithRole>> {
        identity.require_admin()?;

        let users = self.user_repo.find_all(&page).await?;
        let roles: HashMap<RoleId, Role> = self
            .role_repo
            .find_all()
            .await?
            .into_iter()
            .map(|role| (role.id, role))
            .collect();

        Ok(users.map(|user| {
            let role = roles.get(&user.role_id).cloned();
            UserWithRole { user, role }
        }))
    }

    /// Returns the caller's own profile with the role resolved.
    pub async fn get_profile(&self, identity: &RequestIdentity) -> AppResult<UserWithRole> {
        let user = self
            .user_repo
            .find_by_id(identity.subject_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let role = self.role_repo.find_by_id(user.role_id).await?;

        Ok(UserWithRole { user, role })
    }

    /// Updates the caller's own profile.
    pub async fn update_profile(
        &self,
        identity: &RequestIdentity,
        req: UpdateProfileRequest,
    ) -> AppResult<UserWithRole> {
        let update = self
            .build_update(
                identity.subject_id,
                req.first_name,
                req.last_name,
                req.email,
                req.password,
                None,
            )
            .await?;

        let user = self.user_repo.update(identity.subject_id, &update).await?;
        let role = self.role_repo.find_by_id(user.role_id).await?;
        info!(user_id = %identity.subject_id, "Profile updated");
        Ok(UserWithRole { user, role })
    }

    /// Updates any user by id (admin only).
    pub async fn update_user(
        &self,
        identity: &RequestIdentity,
        user_id: UserId,
        req: AdminUpdateUserRequest,
    ) -> AppResult<UserWithRole> {
        identity.require_admin()?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(role_id) = req.role_id {
            if !self.role_repo.exists(role_id).await? {
                return Err(AppError::validation(format!("Role {role_id} not found")));
            }
        }

        let update = self
            .build_update(
                user_id,
                req.first_name,
                req.last_name,
                req.email,
                req.password,
                req.role_id,
            )
            .await?;

        let user = self.user_repo.update(user_id, &update).await?;
        let role = self.role_repo.find_by_id(user.role_id).await?;
        info!(admin_id = %identity.subject_id, target_id = %user_id, "User updated by admin");
        Ok(UserWithRole { user, role })
    }

    /// Deletes a user by id (admin only).
    pub async fn delete_user(&self, identity: &RequestIdentity, user_id: UserId) -> AppResult<()> {
        identity.require_admin()?;

        self.user_repo.delete(user_id).await?;
        info!(admin_id = %identity.subject_id, target_id = %user_id, "User deleted");
        Ok(())
    }

    /// Assembles an [`UpdateUser`] from optional fields, hashing the
    /// password and checking email uniqueness against other accounts.
    async fn build_update(
        &self,
        target_id: UserId,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        password: Option<String>,
        role_id: Option<RoleId>,
    ) -> AppResult<UpdateUser> {
        let mut update = UpdateUser {
            first_name,
            last_name,
            role_id,
            ..UpdateUser::default()
        };

        if let Some(email) = email {
            if let Some(existing) = self.user_repo.find_by_email(&email).await? {
                if existing.id != target_id {
                    return Err(AppError::conflict("Email already in use"));
                }
            }
            update.email = Some(email);
        }

        if let Some(password) = password {
            self.policy.validate(&password)?;
            update.password_hash = Some(self.hasher.hash_password(&password)?);
        }

        if update.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        Ok(update)
    }
}
