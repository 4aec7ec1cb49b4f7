//! # onestay-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all OneStay entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
