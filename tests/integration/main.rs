//! End-to-end tests against the full router and a live PostgreSQL instance.
//!
//! Every test is `#[ignore]`d by default so the suite stays runnable
//! without infrastructure; point `config/test.toml` (or
//! `ONESTAY__DATABASE__URL`) at a scratch database and run
//! `cargo test -- --ignored`.

mod helpers;

mod auth_test;
mod property_test;
mod user_test;
