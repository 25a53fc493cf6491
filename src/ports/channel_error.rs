//! Errors shared by the notification channel ports.

use thiserror::Error;

/// Failure of one best-effort channel call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The call did not finish within the configured bound.
    #[error("Channel call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Transport-level failure (connect, TLS, broken pipe).
    #[error("Network error: {0}")]
    Network(String),

    /// The remote service answered with an error status.
    #[error("Rejected with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The provider failed the call without an HTTP status we can report.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The push descriptor does not have a deliverable shape.
    #[error("Invalid push subscription: {0}")]
    InvalidSubscription(String),

    /// Payload could not be encoded, signed or encrypted.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl ChannelError {
    pub fn network(message: impl Into<String>) -> Self {
        ChannelError::Network(message.into())
    }

    pub fn rejected(status: u16, detail: impl Into<String>) -> Self {
        ChannelError::Rejected {
            status,
            detail: detail.into(),
        }
    }
}
