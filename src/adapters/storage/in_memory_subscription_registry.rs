//! In-Memory Subscription Registry
//!
//! Append-only list of push descriptors. Deduplication compares whole JSON
//! trees, which is linear in the number of entries; fine at the expected
//! scale of a few hundred browsers.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::notification::{PushSubscription, RegistrationOutcome};
use crate::ports::SubscriptionRegistry;

/// Process-lifetime registry of push descriptors.
///
/// Built once at startup and shared as `Arc<dyn SubscriptionRegistry>`.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRegistry {
    entries: RwLock<Vec<PushSubscription>>,
}

impl InMemorySubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionRegistry for InMemorySubscriptionRegistry {
    async fn register(&self, subscription: PushSubscription) -> RegistrationOutcome {
        // Check and append under one write lock so racing duplicates collapse
        let mut entries = self.entries.write().await;
        if entries.contains(&subscription) {
            return RegistrationOutcome::AlreadyRegistered;
        }
        entries.push(subscription);
        RegistrationOutcome::Added
    }

    async fn list_all(&self) -> Vec<PushSubscription> {
        self.entries.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
