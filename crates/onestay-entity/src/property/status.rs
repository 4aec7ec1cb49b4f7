//! Property lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a property listing.
///
/// Stored as a `SMALLINT` in the database. Drafts are visible only to
/// their owner; published listings are publicly readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    /// Not yet published; owner-only.
    Draft = 1,
    /// Publicly visible.
    Published = 2,
}

impl PropertyStatus {
    /// Whether the property is visible to non-owners.
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
