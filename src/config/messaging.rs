//! Messaging API (WhatsApp Cloud) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Messaging provider credentials and recipient
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingConfig {
    /// Graph API access token
    pub access_token: Secret<String>,

    /// Sending phone number identifier
    pub phone_number_id: String,

    /// Recipient of the mission summary, digits only with country code
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Graph API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Graph API version segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl MessagingConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate messaging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("MESSAGING__ACCESS_TOKEN"));
        }
        if self.phone_number_id.is_empty() {
            return Err(ValidationError::MissingRequired("MESSAGING__PHONE_NUMBER_ID"));
        }
        if self.recipient.is_empty() || !self.recipient.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidRecipient);
        }
        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        Ok(())
    }
}

fn default_recipient() -> String {
    "21658216611".to_string()
}

fn default_api_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_api_version() -> String {
    "v19.0".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MessagingConfig {
        MessagingConfig {
            access_token: Secret::new("EAAG".to_string()),
            phone_number_id: "1234".to_string(),
            recipient: default_recipient(),
            api_base_url: default_api_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = config();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn rejects_formatted_recipient() {
        let mut config = config();
        config.recipient = "+216 58 216 611".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRecipient)
        ));
    }

    #[test]
    fn rejects_missing_phone_number_id() {
        let mut config = config();
        config.phone_number_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = config();
        config.api_base_url = "graph.facebook.com".to_string();
        assert!(config.validate().is_err());
    }
}
