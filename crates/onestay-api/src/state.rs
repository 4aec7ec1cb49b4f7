//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use onestay_auth::JwtDecoder;
use onestay_core::config::AppConfig;
use onestay_database::DatabasePool;
use onestay_service::{AuthService, PropertyService, RoleService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool wrapper
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Login and token issuance
    pub auth_service: Arc<AuthService>,
    /// User accounts and profiles
    pub user_service: Arc<UserService>,
    /// Role administration
    pub role_service: Arc<RoleService>,
    /// Property listings and guest guides
    pub property_service: Arc<PropertyService>,
}
