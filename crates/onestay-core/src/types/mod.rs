//! Shared domain types: typed identifiers and pagination.

pub mod id;
pub mod pagination;

pub use id::{PropertyId, RoleId, UserId};
pub use pagination::{PageRequest, PageResponse};
