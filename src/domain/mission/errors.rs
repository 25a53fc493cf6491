//! Mission-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Message sent to the requesting client whenever creation fails.
const CREATION_FAILED_MESSAGE: &str = "Erreur lors de la création de la mission.";

/// Errors that abort mission creation.
///
/// Only these ever reach the requester; notification channel failures are
/// recorded in the fan-out report instead.
#[derive(Debug, Clone, Error)]
pub enum MissionError {
    /// Request is missing a required reference or could not be decoded.
    #[error("Invalid mission request: {0}")]
    Validation(#[from] ValidationError),

    /// The persistence write failed; nothing was announced.
    #[error("Mission persistence failed: {0}")]
    Persistence(#[from] DomainError),
}

impl MissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MissionError::Validation(_) => ErrorCode::ValidationFailed,
            MissionError::Persistence(e) => e.code,
        }
    }

    /// Client-facing message. Internal causes are logged, never sent.
    pub fn user_message(&self) -> &'static str {
        CREATION_FAILED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_internal_cause() {
        let err = MissionError::from(DomainError::database("duplicate key value"));
        assert_eq!(err.user_message(), "Erreur lors de la création de la mission.");
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_error_maps_to_validation_code() {
        let err = MissionError::from(ValidationError::missing_field("chauffeurId"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.to_string().contains("chauffeurId"));
    }
}
