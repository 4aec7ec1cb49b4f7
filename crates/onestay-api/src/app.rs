//! Application builder — wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use onestay_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordPolicy};
use onestay_core::config::AppConfig;
use onestay_core::config::server::CorsConfig;
use onestay_core::error::AppError;
use onestay_database::DatabasePool;
use onestay_database::repositories::{PropertyRepository, RoleRepository, UserRepository};
use onestay_service::{AuthService, PropertyService, RoleService, UserService};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Constructs the shared application state from configuration and an open
/// database pool.
pub fn build_state(config: &AppConfig, db: DatabasePool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let role_repo = Arc::new(RoleRepository::new(db.pool().clone()));
    let property_repo = Arc::new(PropertyRepository::new(db.pool().clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let policy = Arc::new(PasswordPolicy::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&role_repo),
        Arc::clone(&hasher),
        Arc::clone(&jwt_encoder),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&role_repo),
        Arc::clone(&hasher),
        Arc::clone(&policy),
    ));
    let role_service = Arc::new(RoleService::new(Arc::clone(&role_repo)));
    let property_service = Arc::new(PropertyService::new(Arc::clone(&property_repo)));

    AppState {
        config: Arc::new(config.clone()),
        db,
        jwt_decoder,
        auth_service,
        user_service,
        role_service,
        property_service,
    }
}

/// Runs the OneStay server with the given configuration and database pool.
///
/// Blocks until the server shuts down on ctrl-c or SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let state = build_state(&config, db);
    let app = build_app(state, &config.server.cors);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("OneStay server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes when ctrl-c or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
