//! # onestay-entity
//!
//! Domain entity models for OneStay. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod property;
pub mod role;
pub mod user;

// Several entity fields are stored as JSONB; re-export the wrapper so
// downstream crates can build and modify those fields without a direct
// sqlx dependency.
pub use sqlx::types::Json;
