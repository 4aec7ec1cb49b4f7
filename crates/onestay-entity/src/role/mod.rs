//! Role domain entities.

pub mod model;

pub use model::{CreateRole, RESERVED_ROLES, ReservedRole, Role};
