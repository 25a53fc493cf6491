//! Push Adapters.
//!
//! Implementations of the PushDeliveryClient port.
//!
//! ## Available Adapters
//!
//! - `WebPushDeliveryClient` - VAPID-signed, encrypted browser push

mod web_push_client;

pub use web_push_client::{WebPushConfig, WebPushDeliveryClient};
