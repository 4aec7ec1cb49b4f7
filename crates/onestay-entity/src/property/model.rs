//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use onestay_core::types::{PropertyId, UserId};

use super::guide::PropertyGuide;
use super::status::PropertyStatus;

/// A rental property listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: PropertyId,
    /// The user who owns this listing.
    pub host_id: UserId,
    /// Listing name, unique per owner.
    pub name: String,
    /// URL-safe globally unique slug, derived from the name.
    pub slug: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub zip_code: Option<String>,
    /// Lifecycle status.
    pub status: PropertyStatus,
    /// Image URLs.
    pub images: Json<Vec<String>>,
    /// The guest guide document.
    pub guide: Json<PropertyGuide>,
    /// When the property was first published.
    pub published_at: Option<DateTime<Utc>>,
    /// When the property was created.
    pub created_at: DateTime<Utc>,
    /// When the property was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Whether the given user owns this listing.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.host_id == user_id
    }

    /// Whether the listing is visible to the given (possibly anonymous)
    /// viewer. Drafts are visible only to their owner.
    pub fn is_visible_to(&self, viewer: Option<UserId>) -> bool {
        self.status.is_published() || viewer.is_some_and(|id| self.is_owned_by(id))
    }
}

/// Data required to create a new property.
///
/// The slug is allocated separately from the name; the status always
/// starts as draft and the guide starts with every section disabled.
#[derive(Debug, Clone)]
pub struct CreateProperty {
    /// Owning user.
    pub host_id: UserId,
    /// Listing name.
    pub name: String,
    /// Allocated unique slug.
    pub slug: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Postal code.
    pub zip_code: Option<String>,
    /// Image URLs.
    pub images: Vec<String>,
    /// Initial guide document.
    pub guide: PropertyGuide,
}
