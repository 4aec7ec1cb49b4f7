//! # onestay-service
//!
//! Business logic service layer for OneStay. Each service orchestrates
//! repositories and authentication primitives to implement application-level
//! use cases: login, user administration, role management, and the property
//! lifecycle from draft to published listing.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod property;
pub mod role;
pub mod slug;
pub mod user;

pub use auth::{AuthService, LoginOutcome};
pub use context::RequestIdentity;
pub use property::PropertyService;
pub use role::RoleService;
pub use user::{UserService, UserWithRole};
