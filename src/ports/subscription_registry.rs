//! SubscriptionRegistry port - deduplicated browser push descriptors.

use async_trait::async_trait;

use crate::domain::notification::{PushSubscription, RegistrationOutcome};

/// Port for the set of registered push descriptors.
///
/// Implementations must:
/// - Keep at most one structurally equal entry
/// - Preserve insertion order in `list_all`
/// - Tolerate concurrent `register` and `list_all`
///
/// There is no removal: expired endpoints stay until the process exits.
#[async_trait]
pub trait SubscriptionRegistry: Send + Sync {
    /// Add the descriptor unless an equal one is already present.
    async fn register(&self, subscription: PushSubscription) -> RegistrationOutcome;

    /// Snapshot of every descriptor, in insertion order.
    async fn list_all(&self) -> Vec<PushSubscription>;

    /// Number of registered descriptors.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_registry_is_object_safe() {
        fn _accepts_dyn(_registry: &dyn SubscriptionRegistry) {}
    }
}
