//! # onestay-auth
//!
//! Authentication and authorization building blocks for OneStay.
//!
//! ## Modules
//!
//! - `jwt` - signed token issuance, validation, and claims
//! - `extract` - bearer credential extraction from request headers
//! - `rbac` - role-tier access checks
//! - `password` - Argon2id password hashing and policy enforcement

pub mod extract;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use extract::extract_bearer_token;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
pub use rbac::AccessTier;
