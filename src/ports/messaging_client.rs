//! MessagingClient port - third-party conversational messaging API.

use async_trait::async_trait;
use serde_json::Value;

use super::ChannelError;

/// Port for sending a plain text message to one recipient.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Send `body` to `recipient` (provider-specific address, e.g. a phone number).
    ///
    /// Returns the provider's acknowledgement body.
    async fn send_text(&self, recipient: &str, body: &str) -> Result<Value, ChannelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messaging_client_is_object_safe() {
        fn _accepts_dyn(_client: &dyn MessagingClient) {}
    }
}
