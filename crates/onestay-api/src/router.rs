//! Route definitions for the OneStay HTTP API.
//!
//! Health endpoints live at the root; everything else is mounted under
//! `/api/v1`. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::Router;
use axum::routing::{delete, get, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(property_routes());

    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_routes)
        .with_state(state)
}

/// Liveness and readiness probes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Login and role administration
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/roles", get(handlers::auth::list_roles))
        .route("/auth/roles", post(handlers::auth::create_role))
        .route("/auth/roles/{id}", delete(handlers::auth::delete_role))
}

/// User accounts and profiles
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(handlers::user::register))
        .route("/users", get(handlers::user::list_users))
        .route("/users/profile", get(handlers::user::get_profile))
        .route("/users/profile", put(handlers::user::update_profile))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Property listings and guest guides
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::list_properties))
        .route("/properties", post(handlers::property::create_property))
        .route(
            "/properties/user/{user_id}",
            get(handlers::property::list_user_properties),
        )
        .route(
            "/properties/{id_or_slug}",
            get(handlers::property::get_property),
        )
        .route(
            "/properties/{id_or_slug}",
            put(handlers::property::update_property),
        )
        .route(
            "/properties/{id_or_slug}",
            delete(handlers::property::delete_property),
        )
        .route(
            "/properties/{id_or_slug}/publish",
            post(handlers::property::publish_property),
        )
}
