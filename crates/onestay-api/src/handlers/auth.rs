//! Auth handlers — login and role administration.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::{AppendHeaders, IntoResponse};
use validator::Validate;

use onestay_core::types::RoleId;
use onestay_service::role::CreateRoleRequest as SvcCreateRole;

use crate::dto::request::{CreateRoleRequest, LoginRequest};
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, RoleResponse, UserResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::{require_admin, require_super_admin};
use crate::state::AppState;

/// POST /api/v1/auth/login
///
/// The token travels in the body and is mirrored in the `Authorization`
/// response header for clients that read it from there.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    let bearer = format!("Bearer {}", outcome.token.token);
    let body = Json(ApiResponse::ok(LoginResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        user: UserResponse::from_parts(outcome.user, outcome.role),
    }));

    Ok((AppendHeaders([(AUTHORIZATION, bearer)]), body))
}

/// GET /api/v1/auth/roles
pub async fn list_roles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<RoleResponse>>>, ApiError> {
    require_admin(&auth)?;

    let roles = state.role_service.list(&auth).await?;
    let roles: Vec<RoleResponse> = roles.into_iter().map(RoleResponse::from).collect();

    Ok(Json(ApiResponse::ok(roles)))
}

/// POST /api/v1/auth/roles
pub async fn create_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoleResponse>>), ApiError> {
    require_super_admin(&auth)?;
    req.validate()?;

    let role = state
        .role_service
        .create(
            &auth,
            SvcCreateRole {
                name: req.name,
                slug: req.slug,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RoleResponse::from(role))),
    ))
}

/// DELETE /api/v1/auth/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<RoleId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_super_admin(&auth)?;

    state.role_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Role deleted successfully".to_string(),
    })))
}
