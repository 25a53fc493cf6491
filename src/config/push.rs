//! Browser push (VAPID) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// VAPID key pair and contact subject
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    /// Base64url public key handed to browsers
    pub vapid_public_key: String,

    /// Base64url private key used to sign push requests
    pub vapid_private_key: Secret<String>,

    /// Contact claim, `mailto:` or `https:` URL
    pub vapid_subject: String,

    /// Push service retention time in seconds
    #[serde(default = "default_ttl")]
    pub ttl_secs: u32,
}

impl PushConfig {
    /// Validate push configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.vapid_public_key.is_empty() {
            return Err(ValidationError::MissingRequired("PUSH__VAPID_PUBLIC_KEY"));
        }
        if self.vapid_private_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PUSH__VAPID_PRIVATE_KEY"));
        }
        if !self.vapid_subject.starts_with("mailto:") && !self.vapid_subject.starts_with("https:")
        {
            return Err(ValidationError::InvalidVapidSubject);
        }
        Ok(())
    }
}

fn default_ttl() -> u32 {
    60 * 60 * 24
}
