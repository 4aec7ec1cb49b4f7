//! User management CLI commands.

use std::collections::HashMap;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use onestay_auth::password::{PasswordHasher, PasswordPolicy};
use onestay_core::error::AppError;
use onestay_core::types::{PageRequest, RoleId};
use onestay_database::repositories::role::RoleRepository;
use onestay_database::repositories::user::UserRepository;
use onestay_entity::role::Role;
use onestay_entity::user::{CreateUser, User};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List {
        /// Filter by role slug
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Create a user directly in the database
    ///
    /// Registration over HTTP requires an admin token, so the first
    /// admin account has to come from here.
    Create {
        /// First name
        #[arg(long)]
        first_name: Option<String>,
        /// Last name
        #[arg(long)]
        last_name: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Role slug to assign
        #[arg(short, long, default_value = "client")]
        role: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Full name
    name: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Created at
    created_at: String,
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());
    let role_repo = RoleRepository::new(pool.clone());

    match &args.command {
        UserCommand::List { role } => {
            let roles: HashMap<RoleId, Role> = role_repo
                .find_all()
                .await?
                .into_iter()
                .map(|r| (r.id, r))
                .collect();

            let users = fetch_all_users(&user_repo).await?;

            let rows: Vec<UserRow> = users
                .iter()
                .filter(|u| match role {
                    Some(slug) => roles.get(&u.role_id).is_some_and(|r| r.slug == *slug),
                    None => true,
                })
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    name: u.full_name(),
                    email: u.email.clone(),
                    role: roles
                        .get(&u.role_id)
                        .map(|r| r.slug.clone())
                        .unwrap_or_else(|| u.role_id.to_string()),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Create {
            first_name,
            last_name,
            email,
            password,
            role,
        } => {
            let first_name = match first_name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("First name")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let last_name = match last_name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Last name")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            PasswordPolicy::new(&config.auth).validate(&password)?;

            let assigned_role = role_repo
                .find_all()
                .await?
                .into_iter()
                .find(|r| r.slug == *role)
                .ok_or_else(|| AppError::not_found(format!("Role '{}' not found", role)))?;

            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let user = user_repo
                .create(&CreateUser {
                    first_name,
                    last_name,
                    email,
                    password_hash,
                    role_id: assigned_role.id,
                })
                .await?;

            output::print_success(&format!(
                "User '{}' created with role '{}' (id: {})",
                user.email, assigned_role.slug, user.id
            ));
        }
    }

    Ok(())
}

/// Drain every page of the user listing.
async fn fetch_all_users(repo: &UserRepository) -> Result<Vec<User>, AppError> {
    let mut users = Vec::new();
    let mut page = PageRequest::new(1, 100);

    loop {
        let batch = repo.find_all(&page).await?;
        let has_next = batch.has_next;
        users.extend(batch.items);
        if !has_next {
            break;
        }
        page = PageRequest::new(page.page + 1, 100);
    }

    Ok(users)
}
