//! Session tracking for realtime connections.
//!
//! Purely observational: nothing else reads this state. Connect and
//! disconnect are idempotent, so a duplicate or out-of-order call is a no-op.

use std::collections::HashSet;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for a WebSocket client connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracks which clients are currently connected.
#[derive(Default)]
pub struct SessionTracker {
    active: RwLock<HashSet<ClientId>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a connection. Returns false if the client was already known.
    pub async fn connect(&self, client_id: &ClientId) -> bool {
        let mut active = self.active.write().await;
        let inserted = active.insert(client_id.clone());
        if inserted {
            tracing::info!(client_id = %client_id, active = active.len(), "Client connected");
        }
        inserted
    }

    /// Records a disconnection. Returns false if the client was not connected.
    pub async fn disconnect(&self, client_id: &ClientId) -> bool {
        let mut active = self.active.write().await;
        let removed = active.remove(client_id);
        if removed {
            tracing::info!(client_id = %client_id, active = active.len(), "Client disconnected");
        }
        removed
    }

    pub async fn active_count(&self) -> usize {
        self.active.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_is_idempotent() {
        let tracker = SessionTracker::new();
        let client = ClientId::new();

        assert!(tracker.connect(&client).await);
        assert!(!tracker.connect(&client).await);
        assert_eq!(tracker.active_count().await, 1);
    }

    #[tokio::test]
    async fn disconnect_is_idempotent() {
        let tracker = SessionTracker::new();
        let client = ClientId::new();
        tracker.connect(&client).await;

        assert!(tracker.disconnect(&client).await);
        assert!(!tracker.disconnect(&client).await);
        assert_eq!(tracker.active_count().await, 0);
    }

    #[tokio::test]
    async fn disconnect_before_connect_is_noop() {
        let tracker = SessionTracker::new();

        assert!(!tracker.disconnect(&ClientId::new()).await);
        assert_eq!(tracker.active_count().await, 0);
    }

    #[tokio::test]
    async fn counts_distinct_clients() {
        let tracker = SessionTracker::new();
        let a = ClientId::new();
        let b = ClientId::new();

        tracker.connect(&a).await;
        tracker.connect(&b).await;
        tracker.disconnect(&a).await;

        assert_eq!(tracker.active_count().await, 1);
    }

    #[test]
    fn client_ids_are_unique() {
        assert_ne!(ClientId::new(), ClientId::new());
        assert_eq!(ClientId::new().to_string().len(), 36);
    }
}
