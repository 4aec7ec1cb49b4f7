//! Property listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use onestay_core::types::{PageResponse, UserId};
use onestay_entity::property::Property;
use onestay_service::property::{
    CreatePropertyRequest as SvcCreateProperty, UpdatePropertyRequest as SvcUpdateProperty,
};

use crate::dto::request::{CreatePropertyRequest, UpdatePropertyRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, OptionalAuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Property>>>, ApiError> {
    let page = state
        .property_service
        .list_published(params.into_page_request())
        .await?;

    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/v1/properties
pub async fn create_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Property>>), ApiError> {
    req.validate()?;

    let property = state
        .property_service
        .create(
            &auth,
            SvcCreateProperty {
                name: req.name,
                description: req.description,
                address: req.address,
                city: req.city,
                country: req.country,
                zip_code: req.zip_code,
                images: req.images,
                guide: req.guide,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(property))))
}

/// GET /api/v1/properties/{id_or_slug}
pub async fn get_property(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let viewer_id = viewer.0.map(|identity| identity.subject_id);

    let property = state
        .property_service
        .get_by_id_or_slug(viewer_id, &identifier)
        .await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// PUT /api/v1/properties/{id_or_slug}
pub async fn update_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(identifier): Path<String>,
    Json(req): Json<UpdatePropertyRequest>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    req.validate()?;

    let property = state
        .property_service
        .update(
            &auth,
            &identifier,
            SvcUpdateProperty {
                name: req.name,
                description: req.description,
                address: req.address,
                city: req.city,
                country: req.country,
                zip_code: req.zip_code,
                images: req.images,
                guide: req.guide,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// POST /api/v1/properties/{id_or_slug}/publish
pub async fn publish_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<Property>>, ApiError> {
    let property = state.property_service.publish(&auth, &identifier).await?;

    Ok(Json(ApiResponse::ok(property)))
}

/// DELETE /api/v1/properties/{id_or_slug}
pub async fn delete_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(identifier): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.property_service.delete(&auth, &identifier).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Property deleted successfully".to_string(),
    })))
}

/// GET /api/v1/properties/user/{user_id}
pub async fn list_user_properties(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(user_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<Property>>>, ApiError> {
    let viewer_id = viewer.0.map(|identity| identity.subject_id);

    let properties = state
        .property_service
        .list_by_host(viewer_id, user_id)
        .await?;

    Ok(Json(ApiResponse::ok(properties)))
}
