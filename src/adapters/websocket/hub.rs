//! Realtime hub - topic broadcast to every connected session.
//!
//! Every connection subscribes once to the hub and receives all topic
//! events. A driver's client listens for its own `notifChauffeur_<id>`
//! event name; other clients ignore it.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::domain::foundation::Timestamp;
use crate::ports::{ChannelError, RealtimePublisher};

/// An event published under a topic name.
#[derive(Debug, Clone)]
pub struct TopicEvent {
    pub topic: String,
    pub payload: Value,
    pub emitted_at: Timestamp,
}

/// In-process broadcast hub backing the realtime channel.
///
/// Slow sessions that fall more than `capacity` events behind lose the
/// oldest ones; publishers never wait.
pub struct RealtimeHub {
    sender: broadcast::Sender<TopicEvent>,
}

impl RealtimeHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Create with default capacity (256 events).
    pub fn with_default_capacity() -> Self {
        Self::new(256)
    }

    /// Receive every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<TopicEvent> {
        self.sender.subscribe()
    }

    /// Number of sessions currently subscribed.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[async_trait]
impl RealtimePublisher for RealtimeHub {
    async fn publish(&self, topic: &str, payload: Value) -> Result<usize, ChannelError> {
        let event = TopicEvent {
            topic: topic.to_string(),
            payload,
            emitted_at: Timestamp::now(),
        };

        // Err only means nobody is listening
        match self.sender.send(event) {
            Ok(recipients) => Ok(recipients),
            Err(_) => {
                tracing::trace!(topic, "Topic event published with no listeners");
                Ok(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn publish_without_listeners_reaches_nobody() {
        let hub = RealtimeHub::new(8);

        let recipients = hub
            .publish("notifChauffeur_7", json!({"missionId": 1}))
            .await
            .unwrap();

        assert_eq!(recipients, 0);
    }

    #[tokio::test]
    async fn every_subscriber_receives_topic_event() {
        let hub = RealtimeHub::new(8);
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        let recipients = hub
            .publish("notifChauffeur_7", json!({"missionId": 42}))
            .await
            .unwrap();

        assert_eq!(recipients, 2);
        for rx in [&mut first, &mut second] {
            let event = rx.recv().await.unwrap();
            assert_eq!(event.topic, "notifChauffeur_7");
            assert_eq!(event.payload["missionId"], 42);
        }
    }

    #[tokio::test]
    async fn dropped_subscriber_is_not_counted() {
        let hub = RealtimeHub::new(8);
        let kept = hub.subscribe();
        drop(hub.subscribe());

        assert_eq!(hub.receiver_count(), 1);
        assert_eq!(hub.publish("t", json!(null)).await.unwrap(), 1);
        drop(kept);
    }

    #[tokio::test]
    async fn lagging_subscriber_sees_lag_then_newest_events() {
        let hub = RealtimeHub::new(2);
        let mut rx = hub.subscribe();

        for i in 0..4 {
            hub.publish("t", json!(i)).await.unwrap();
        }

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(2))
        ));
        assert_eq!(rx.recv().await.unwrap().payload, json!(2));
        assert_eq!(rx.recv().await.unwrap().payload, json!(3));
    }
}
