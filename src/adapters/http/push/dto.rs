//! HTTP DTOs for push endpoints.

use serde::Serialize;

pub const SUBSCRIPTION_SAVED: &str = "Abonnement enregistré";

/// Plain acknowledgment body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn subscription_saved() -> Self {
        Self::new(SUBSCRIPTION_SAVED)
    }
}
