//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod mission;
pub mod subscription;

pub use mission::{CreateMissionCommand, CreateMissionHandler, CreateMissionResult, FanOutSettings};
pub use subscription::RegisterSubscriptionHandler;
