//! User account and profile handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use onestay_core::types::{PageResponse, UserId};
use onestay_service::user::{
    AdminUpdateUserRequest as SvcAdminUpdate, RegisterUserRequest as SvcRegister,
    UpdateProfileRequest as SvcUpdateProfile,
};

use crate::dto::request::{AdminUpdateUserRequest, RegisterRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/v1/users/register
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    require_admin(&auth)?;
    req.validate()?;

    let created = state
        .user_service
        .register(
            &auth,
            SvcRegister {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password: req.password,
                role_id: req.role_id,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(created))),
    ))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    require_admin(&auth)?;

    let page = state
        .user_service
        .list(&auth, params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page.map(UserResponse::from))))
}

/// GET /api/v1/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let profile = state.user_service.get_profile(&auth).await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(profile))))
}

/// PUT /api/v1/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()?;

    let updated = state
        .user_service
        .update_profile(
            &auth,
            SvcUpdateProfile {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(updated))))
}

/// PUT /api/v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<UserId>,
    Json(req): Json<AdminUpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_admin(&auth)?;
    req.validate()?;

    let updated = state
        .user_service
        .update_user(
            &auth,
            id,
            SvcAdminUpdate {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password: req.password,
                role_id: req.role_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(updated))))
}

/// DELETE /api/v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;

    state.user_service.delete_user(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted successfully".to_string(),
    })))
}
