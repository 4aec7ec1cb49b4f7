//! Property listing lifecycle — creation, lookup, updates, publishing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use onestay_core::AppResult;
use onestay_core::error::AppError;
use onestay_core::types::{PageRequest, PageResponse, PropertyId, UserId};
use onestay_database::repositories::{PropertyRepository, PropertyWrite};
use onestay_entity::Json;
use onestay_entity::property::{CreateProperty, Property, PropertyGuide, PropertyGuideUpdate};

use crate::context::RequestIdentity;
use crate::slug;

/// How many times a write is retried when a concurrent writer grabs the
/// allocated slug between the uniqueness probe and the insert.
const MAX_WRITE_ATTEMPTS: usize = 3;

/// Manages property listings and their draft/published lifecycle.
#[derive(Debug, Clone)]
pub struct PropertyService {
    /// Property repository.
    property_repo: Arc<PropertyRepository>,
}

/// Request to create a new listing. It starts as a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePropertyRequest {
    /// Listing name, unique per host.
    pub name: String,
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
    #[serde(default)]
    pub images: Vec<String>,
    /// Guest guide sections; absent ones start disabled.
    #[serde(default)]
    pub guide: PropertyGuide,
}

/// Partial update of a listing. Provided guide sections replace the
/// stored ones wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePropertyRequest {
    /// New name; triggers slug regeneration.
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

impl UpdatePropertyRequest {
    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.zip_code.is_none()
            && self.images.is_none()
            && self.guide.is_empty()
    }
}

impl PropertyService {
    /// Creates a new property service.
    pub fn new(property_repo: Arc<PropertyRepository>) -> Self {
        Self { property_repo }
    }

    /// Creates a draft listing for the authenticated host.
    pub async fn create(
        &self,
        identity: &RequestIdentity,
        req: CreatePropertyRequest,
    ) -> AppResult<Property> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Property name is required"));
        }

        let host_id = identity.subject_id;
        if self
            .property_repo
            .exists_by_name_for_host(host_id, &req.name)
            .await?
        {
            return Err(AppError::conflict(
                "You already have a property with this name",
            ));
        }

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let slug = slug::allocate(&req.name, |candidate| {
                let repo = Arc::clone(&self.property_repo);
                async move { repo.exists_by_slug(&candidate).await }
            })
            .await?;

            let data = CreateProperty {
                host_id,
                name: req.name.clone(),
                slug,
                description: req.description.clone(),
                address: req.address.clone(),
                city: req.city.clone(),
                country: req.country.clone(),
                zip_code: req.zip_code.clone(),
                images: req.images.clone(),
                guide: req.guide.clone(),
            };

            match self.property_repo.insert(&data).await? {
                PropertyWrite::Written(property) => {
                    info!(
                        host_id = %host_id,
                        property_id = %property.id,
                        slug = %property.slug,
                        "Property created"
                    );
                    return Ok(property);
                }
                PropertyWrite::SlugConflict => {
                    // Lost the probe-and-insert race; re-allocate and retry.
                    warn!(host_id = %host_id, name = %req.name, "Slug taken concurrently, retrying");
                }
            }
        }

        Err(AppError::internal(
            "Could not allocate a unique slug under concurrent writes",
        ))
    }

    /// Fetches a listing by id or slug.
    ///
    /// Drafts are reported as not found to everyone but their owner, so
    /// their existence never leaks.
    pub async fn get_by_id_or_slug(
        &self,
        viewer: Option<UserId>,
        identifier: &str,
    ) -> AppResult<Property> {
        let property = self.resolve(identifier).await?;

        if !property.is_visible_to(viewer) {
            return Err(AppError::not_found("Property not found"));
        }

        Ok(property)
    }

    /// Lists published listings, newest first.
    pub async fn list_published(&self, page: PageRequest) -> AppResult<PageResponse<Property>> {
        self.property_repo.find_published(&page).await
    }

    /// Lists a host's properties. Drafts are included only when the
    /// viewer is the host.
    pub async fn list_by_host(
        &self,
        viewer: Option<UserId>,
        host_id: UserId,
    ) -> AppResult<Vec<Property>> {
        let include_drafts = viewer == Some(host_id);
        self.property_repo.find_by_host(host_id, include_drafts).await
    }

    /// Applies a partial update to a listing (owner only).
    ///
    /// A name change re-runs slug allocation; renaming to a name that
    /// normalizes to the current slug keeps it. An empty update is a
    /// no-op returning the listing unchanged.
    pub async fn update(
        &self,
        identity: &RequestIdentity,
        identifier: &str,
        req: UpdatePropertyRequest,
    ) -> AppResult<Property> {
        let property = self.resolve(identifier).await?;

        if !property.is_owned_by(identity.subject_id) {
            return Err(AppError::authorization(
                "You are not allowed to modify this property",
            ));
        }

        if req.is_empty() {
            return Ok(property);
        }

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let mut updated = property.clone();
            let req = req.clone();

            if let Some(name) = req.name {
                updated.slug = slug::allocate_for_rename(&name, &property.slug, |candidate| {
                    let repo = Arc::clone(&self.property_repo);
                    async move { repo.exists_by_slug(&candidate).await }
                })
                .await?;
                updated.name = name;
            }
            if let Some(description) = req.description {
                updated.description = Some(description);
            }
            if let Some(address) = req.address {
                updated.address = address;
            }
            if let Some(city) = req.city {
                updated.city = city;
            }
            if let Some(country) = req.country {
                updated.country = country;
            }
            if let Some(zip_code) = req.zip_code {
                updated.zip_code = Some(zip_code);
            }
            if let Some(images) = req.images {
                updated.images = Json(images);
            }
            req.guide.apply(&mut updated.guide.0);

            match self.property_repo.update(&updated).await? {
                PropertyWrite::Written(property) => {
                    info!(
                        host_id = %identity.subject_id,
                        property_id = %property.id,
                        slug = %property.slug,
                        "Property updated"
                    );
                    return Ok(property);
                }
                PropertyWrite::SlugConflict => {
                    warn!(
                        host_id = %identity.subject_id,
                        property_id = %property.id,
                        "Slug taken concurrently, retrying"
                    );
                }
            }
        }

        Err(AppError::internal(
            "Could not allocate a unique slug under concurrent writes",
        ))
    }

    /// Publishes a listing (owner only). Re-publishing refreshes the
    /// publication timestamp.
    pub async fn publish(
        &self,
        identity: &RequestIdentity,
        identifier: &str,
    ) -> AppResult<Property> {
        let property = self.resolve(identifier).await?;

        if !property.is_owned_by(identity.subject_id) {
            return Err(AppError::authorization(
                "You are not allowed to publish this property",
            ));
        }

        let property = self.property_repo.publish(property.id).await?;
        info!(
            host_id = %identity.subject_id,
            property_id = %property.id,
            "Property published"
        );
        Ok(property)
    }

    /// Deletes a listing (owner only).
    pub async fn delete(&self, identity: &RequestIdentity, identifier: &str) -> AppResult<()> {
        let property = self.resolve(identifier).await?;

        if !property.is_owned_by(identity.subject_id) {
            return Err(AppError::authorization(
                "You are not allowed to delete this property",
            ));
        }

        self.property_repo.delete(property.id).await?;
        info!(
            host_id = %identity.subject_id,
            property_id = %property.id,
            "Property deleted"
        );
        Ok(())
    }

    /// Looks a listing up by UUID when the identifier parses as one,
    /// otherwise by slug.
    async fn resolve(&self, identifier: &str) -> AppResult<Property> {
        let found = match identifier.parse::<PropertyId>() {
            Ok(id) => self.property_repo.find_by_id(id).await?,
            Err(_) => self.property_repo.find_by_slug(identifier).await?,
        };

        found.ok_or_else(|| AppError::not_found("Property not found"))
    }
}
