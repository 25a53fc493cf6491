//! Mission repository port (write side).
//!
//! The repository is the authority on mission identity and timestamps:
//! it assigns the identifier and `created_at`/`updated_at`, and it is the
//! one that rejects malformed optional fields.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::mission::{Mission, NewMission};

/// Repository port for mission persistence.
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Insert a mission and return the canonical stored record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on constraint violation, type rejection or connection loss
    async fn insert(&self, mission: &NewMission) -> Result<Mission, DomainError>;
}
