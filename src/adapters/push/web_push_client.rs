//! Web Push client - Implementation of PushDeliveryClient using VAPID signing.
//!
//! Each delivery parses the stored descriptor into subscription info,
//! encrypts the JSON payload (aes128gcm) and signs the request with the
//! server's VAPID key pair.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use web_push::{
    ContentEncoding, IsahcWebPushClient, SubscriptionInfo, VapidSignatureBuilder, WebPushClient,
    WebPushMessageBuilder, URL_SAFE_NO_PAD,
};

use crate::domain::notification::{PushNotification, PushSubscription};
use crate::ports::{ChannelError, PushDeliveryClient};

/// VAPID identity and message options.
#[derive(Debug, Clone)]
pub struct WebPushConfig {
    /// Base64url-encoded public key, handed to browsers.
    pub public_key: String,
    /// Base64url-encoded private key.
    private_key: Secret<String>,
    /// Contact claim (`mailto:` or `https:`).
    pub subject: String,
    /// Push service retention time in seconds.
    pub ttl: u32,
}

impl WebPushConfig {
    pub fn new(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: Secret::new(private_key.into()),
            subject: subject.into(),
            ttl: 60 * 60 * 24,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Sends encrypted notifications through the browser vendors' push services.
pub struct WebPushDeliveryClient {
    config: WebPushConfig,
    client: IsahcWebPushClient,
}

impl WebPushDeliveryClient {
    /// Creates the client. Fails if the private key cannot be decoded.
    pub fn new(config: WebPushConfig) -> Result<Self, ChannelError> {
        VapidSignatureBuilder::from_base64_no_sub(
            config.private_key.expose_secret(),
            URL_SAFE_NO_PAD,
        )
        .map_err(|e| ChannelError::Provider(format!("Invalid VAPID private key: {}", e)))?;

        let client = IsahcWebPushClient::new()
            .map_err(|e| ChannelError::network(format!("Failed to create push client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Public key clients use when subscribing.
    pub fn public_key(&self) -> &str {
        &self.config.public_key
    }
}

/// Converts a stored descriptor into subscription info.
fn subscription_info(subscription: &PushSubscription) -> Result<SubscriptionInfo, ChannelError> {
    serde_json::from_value(subscription.as_value().clone())
        .map_err(|e| ChannelError::InvalidSubscription(e.to_string()))
}

#[async_trait]
impl PushDeliveryClient for WebPushDeliveryClient {
    async fn deliver(
        &self,
        subscription: &PushSubscription,
        notification: &PushNotification,
    ) -> Result<(), ChannelError> {
        let info = subscription_info(subscription)?;

        let payload = serde_json::to_vec(notification)
            .map_err(|e| ChannelError::Encoding(e.to_string()))?;

        let mut signature = VapidSignatureBuilder::from_base64(
            self.config.private_key.expose_secret(),
            URL_SAFE_NO_PAD,
            &info,
        )
        .map_err(|e| ChannelError::Provider(e.to_string()))?;
        signature.add_claim("sub", self.config.subject.as_str());
        let signature = signature
            .build()
            .map_err(|e| ChannelError::Provider(e.to_string()))?;

        let mut builder = WebPushMessageBuilder::new(&info);
        builder.set_ttl(self.config.ttl);
        builder.set_payload(ContentEncoding::Aes128Gcm, &payload);
        builder.set_vapid_signature(signature);
        let message = builder
            .build()
            .map_err(|e| ChannelError::Encoding(e.to_string()))?;

        self.client
            .send(message)
            .await
            .map_err(|e| ChannelError::Provider(e.to_string()))
    }
}
