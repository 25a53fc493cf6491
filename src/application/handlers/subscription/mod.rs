//! Push subscription command handlers.

mod register_subscription;

pub use register_subscription::RegisterSubscriptionHandler;
