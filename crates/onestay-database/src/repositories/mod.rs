//! Repository implementations for all OneStay entities.

pub mod property;
pub mod role;
pub mod user;

pub use property::{PropertyRepository, PropertyWrite};
pub use role::RoleRepository;
pub use user::UserRepository;
