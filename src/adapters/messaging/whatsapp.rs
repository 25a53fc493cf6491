//! WhatsApp Client - Implementation of MessagingClient for the WhatsApp Cloud API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = WhatsAppConfig::new(access_token, phone_number_id)
//!     .with_api_version("v19.0")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = WhatsAppClient::new(config)?;
//! client.send_text("21658216611", "Bonjour").await?;
//! ```
//!
//! Messages are sent with `POST {base_url}/{api_version}/{phone_number_id}/messages`
//! and a bearer token. No retries; a failed send is reported once.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::ports::{ChannelError, MessagingClient};

/// Configuration for the WhatsApp client.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Graph API access token.
    access_token: Secret<String>,
    /// Sending phone number identifier.
    pub phone_number_id: String,
    /// Base URL (default: https://graph.facebook.com).
    pub base_url: String,
    /// Graph API version segment (default: v19.0).
    pub api_version: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl WhatsAppConfig {
    /// Creates a new configuration with the given credentials.
    pub fn new(access_token: impl Into<String>, phone_number_id: impl Into<String>) -> Self {
        Self {
            access_token: Secret::new(access_token.into()),
            phone_number_id: phone_number_id.into(),
            base_url: "https://graph.facebook.com".to_string(),
            api_version: "v19.0".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the Graph API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// WhatsApp Cloud API client.
pub struct WhatsAppClient {
    config: WhatsAppConfig,
    client: Client,
}

impl WhatsAppClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: WhatsAppConfig) -> Result<Self, ChannelError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChannelError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!(
            "{}/{}/{}/messages",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version,
            self.config.phone_number_id
        )
    }
}

#[async_trait]
impl MessagingClient for WhatsAppClient {
    async fn send_text(&self, recipient: &str, body: &str) -> Result<Value, ChannelError> {
        let request = TextMessageRequest::new(recipient, body);

        let response = self
            .client
            .post(self.messages_url())
            .bearer_auth(self.config.access_token())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChannelError::Timeout {
                        secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ChannelError::network(format!("Connection failed: {}", e))
                } else {
                    ChannelError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChannelError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(ChannelError::rejected(
                status.as_u16(),
                provider_error_detail(&text),
            ));
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct TextMessageRequest<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextBody<'a>,
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

impl<'a> TextMessageRequest<'a> {
    fn new(to: &'a str, body: &'a str) -> Self {
        Self {
            messaging_product: "whatsapp",
            to,
            kind: "text",
            text: TextBody { body },
        }
    }
}

/// Extracts the provider's `error` object when the body is JSON, else returns the raw body.
fn provider_error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => match parsed.get("error") {
            Some(error) => error.to_string(),
            None => parsed.to_string(),
        },
        Err(_) => body.to_string(),
    }
}
