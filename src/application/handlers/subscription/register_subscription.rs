//! RegisterSubscriptionHandler - adds a browser push descriptor to the registry.

use std::sync::Arc;

use crate::domain::notification::{PushSubscription, RegistrationOutcome};
use crate::ports::SubscriptionRegistry;

/// Handler for push subscription registration.
///
/// Registration cannot fail. Duplicates are absorbed by the registry and the
/// caller is answered the same way either way.
pub struct RegisterSubscriptionHandler {
    registry: Arc<dyn SubscriptionRegistry>,
}

impl RegisterSubscriptionHandler {
    pub fn new(registry: Arc<dyn SubscriptionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, subscription: PushSubscription) -> RegistrationOutcome {
        let endpoint = subscription.endpoint().map(str::to_string);
        let outcome = self.registry.register(subscription).await;

        match outcome {
            RegistrationOutcome::Added => {
                tracing::info!(endpoint = ?endpoint, "Push subscription registered");
            }
            RegistrationOutcome::AlreadyRegistered => {
                tracing::debug!(endpoint = ?endpoint, "Push subscription already registered");
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubscriptionRegistry;
    use serde_json::json;

    #[tokio::test]
    async fn reports_added_then_already_registered() {
        let registry = Arc::new(InMemorySubscriptionRegistry::new());
        let handler = RegisterSubscriptionHandler::new(registry.clone());
        let sub = PushSubscription::new(json!({"endpoint": "https://push.example/1"}));

        assert_eq!(handler.handle(sub.clone()).await, RegistrationOutcome::Added);
        assert_eq!(
            handler.handle(sub).await,
            RegistrationOutcome::AlreadyRegistered
        );
        assert_eq!(registry.len().await, 1);
    }
}
