//! mailbin library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `provider`: receiving-domain discovery via Cloudflare Email Routing
//! - `db`: migrations and SQLite helpers
//! - `models`: typed records used across layers
//! - `util`: helpers for randomness, content types and HTML escaping

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod provider;
pub mod util;
