//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use onestay_core::types::RoleId;
use onestay_entity::property::{PropertyGuide, PropertyGuideUpdate};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Role to assign.
    pub role_id: RoleId,
}

/// Update own profile request. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProfileRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    /// New password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

/// Update any user request (admin). All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AdminUpdateUserRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    /// New password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    /// New role.
    pub role_id: Option<RoleId>,
}

/// Create role request (super admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoleRequest {
    /// Role name.
    #[validate(length(min = 1, message = "Role name is required"))]
    pub name: String,
    /// Role slug.
    #[validate(length(min = 1, message = "Role slug is required"))]
    pub slug: String,
}

/// Create property request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    /// Listing name.
    #[validate(length(min = 1, max = 255, message = "Property name is required"))]
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// City.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// Country.
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    /// Postal code.
    pub zip_code: Option<String>,
    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Guest guide sections; absent ones start disabled.
    #[serde(default)]
    pub guide: PropertyGuide,
}

/// Update property request. All fields optional; provided guide sections
/// replace the stored ones wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdatePropertyRequest {
    /// New listing name.
    #[validate(length(min = 1, max = 255, message = "Property name cannot be empty"))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New country.
    pub country: Option<String>,
    /// New postal code.
    pub zip_code: Option<String>,
    /// Replacement image list.
    pub images: Option<Vec<String>>,
    /// Guide sections to replace.
    pub guide: PropertyGuideUpdate,
}
