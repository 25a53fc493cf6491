//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `mission` - Mission records, creation input and notification texts
//! - `notification` - Push descriptors, payloads and per-channel delivery outcomes

pub mod foundation;
pub mod mission;
pub mod notification;
