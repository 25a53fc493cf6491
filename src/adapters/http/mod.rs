//! HTTP adapters - REST endpoints.
//!
//! Each concern has its own router; `main` merges them.

pub mod health;
pub mod push;

pub use health::{health_routes, HealthState};
pub use push::{push_routes, PushHandlers};
