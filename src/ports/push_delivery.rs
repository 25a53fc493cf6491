//! PushDeliveryClient port - browser push to a single descriptor.

use async_trait::async_trait;

use crate::domain::notification::{PushNotification, PushSubscription};

use super::ChannelError;

/// Port for the standard browser push protocol.
#[async_trait]
pub trait PushDeliveryClient: Send + Sync {
    /// Deliver one notification to one descriptor. No retry.
    async fn deliver(
        &self,
        subscription: &PushSubscription,
        notification: &PushNotification,
    ) -> Result<(), ChannelError>;
}
