//! RealtimePublisher port - topic broadcast to connected sessions.

use async_trait::async_trait;
use serde_json::Value;

use super::ChannelError;

/// Port for publishing an event on a named real-time topic.
///
/// Delivery is best-effort: publishing to a topic nobody listens to is a
/// success with zero recipients, and receipt is never confirmed.
#[async_trait]
pub trait RealtimePublisher: Send + Sync {
    /// Publish `payload` under the event name `topic`.
    ///
    /// Returns the number of sessions subscribed at send time.
    async fn publish(&self, topic: &str, payload: Value) -> Result<usize, ChannelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realtime_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn RealtimePublisher) {}
    }
}
