//! Role management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use onestay_core::error::AppError;
use onestay_database::repositories::role::RoleRepository;
use onestay_database::seed;

/// Arguments for role commands
#[derive(Debug, Args)]
pub struct RolesArgs {
    /// Role subcommand
    #[command(subcommand)]
    pub command: RolesCommand,
}

/// Role subcommands
#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List all roles
    List,
    /// Insert the built-in roles if they are missing
    Seed,
    /// Delete unreferenced roles and reseed the built-in four
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Role display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RoleRow {
    /// Role ID
    id: i64,
    /// Name
    name: String,
    /// Slug
    slug: String,
    /// Built-in
    built_in: String,
    /// Created at
    created_at: String,
}

/// Execute role commands
pub async fn execute(args: &RolesArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        RolesCommand::List => {
            let roles = RoleRepository::new(pool.clone()).find_all().await?;

            let rows: Vec<RoleRow> = roles
                .iter()
                .map(|r| RoleRow {
                    id: r.id.0,
                    name: r.name.clone(),
                    slug: r.slug.clone(),
                    built_in: if r.is_reserved() { "yes" } else { "no" }.to_string(),
                    created_at: r.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        RolesCommand::Seed => {
            seed::seed_roles(&pool).await?;
            output::print_success("Built-in roles seeded.");
        }
        RolesCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(
                        "This will DELETE every role not assigned to a user and reseed \
                         the built-in roles. Continue?",
                    )
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = seed::reset_roles(&pool).await?;
            output::print_success(&format!(
                "Roles reset: {} removed, built-in roles reseeded.",
                deleted
            ));
        }
    }

    Ok(())
}
