//! Notification module - push descriptors, payloads and delivery outcomes.

mod outcome;
mod payload;
mod subscription;

pub use outcome::{ChannelOutcome, FanOutReport, PushAttempt};
pub use payload::{PushData, PushNotification};
pub use subscription::{PushSubscription, RegistrationOutcome};
