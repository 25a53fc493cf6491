//! PostgreSQL implementation of MissionRepository.
//!
//! Writes to the existing `mission_table`. The schema is owned elsewhere;
//! this adapter relies on these columns:
//!
//! | column | type |
//! |---|---|
//! | `id` | `SERIAL` |
//! | `date_debut`, `date_fin` | `TIMESTAMP` |
//! | `description`, `statut` | `TEXT` |
//! | `id_chauffeur`, `id_transpoteur`, `devis_id`, `vehicule_id` | `INTEGER` |
//! | `kilometrage_arrive`, `kilometrage_debut` | `INTEGER` |
//! | `created_at`, `updated_at` | `TIMESTAMPTZ` |
//!
//! The `RETURNING` row is decoded into exactly these types. Integer and date
//! inputs are cast by the server, so bad input fails before anything is
//! written. A column whose type differs from this table fails only at decode
//! time, after the insert has committed: the row exists but the caller gets
//! an error tagged `committed = true`, and an error line is logged.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, DriverId, MissionId, Timestamp};
use crate::domain::mission::{IntegerInput, Mission, NewMission};
use crate::ports::MissionRepository;

/// PostgreSQL implementation of MissionRepository.
#[derive(Clone)]
pub struct PostgresMissionRepository {
    pool: PgPool,
}

impl PostgresMissionRepository {
    /// Creates a new PostgresMissionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionRepository for PostgresMissionRepository {
    async fn insert(&self, mission: &NewMission) -> Result<Mission, DomainError> {
        // Dates and integers go in as text; the server-side casts decide validity.
        let row = sqlx::query(
            r#"
            INSERT INTO mission_table (
                date_debut, date_fin, description, id_chauffeur, id_transpoteur,
                kilometrage_arrive, kilometrage_debut, statut, created_at, updated_at,
                devis_id, vehicule_id
            ) VALUES (
                $1::timestamp, $2::timestamp, $3, $4::integer, $5::integer,
                $6::integer, $7::integer, $8, NOW(), NOW(),
                $9::integer, $10::integer
            )
            RETURNING id, date_debut, date_fin, description, id_chauffeur, id_transpoteur,
                      kilometrage_arrive, kilometrage_debut, statut, created_at, updated_at,
                      devis_id, vehicule_id
            "#,
        )
        .bind(mission.start_date.as_deref())
        .bind(mission.end_date.as_deref())
        .bind(mission.description.as_deref())
        .bind(mission.driver_id.as_text())
        .bind(mission.carrier_id.as_text())
        .bind(mission.end_odometer.as_text())
        .bind(mission.start_odometer.as_text())
        .bind(mission.status.as_str())
        .bind(mission.quote_id.as_ref().map(IntegerInput::as_text))
        .bind(mission.vehicle_id.as_ref().map(IntegerInput::as_text))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert mission: {}", e)))?;

        row_to_mission(&row).map_err(|e| {
            tracing::error!(error = %e, "Mission row committed but could not be decoded");
            e
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| decode_failure(name, e))
}

/// Error for a `RETURNING` column that does not match the expected type.
fn decode_failure(name: &str, cause: impl std::fmt::Display) -> DomainError {
    DomainError::database(format!(
        "Mission stored but column {} could not be decoded: {}",
        name, cause
    ))
    .with_detail("column", name)
    .with_detail("committed", "true")
}

fn row_to_mission(row: &PgRow) -> Result<Mission, DomainError> {
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;
    let start_date: Option<NaiveDateTime> = column(row, "date_debut")?;
    let end_date: Option<NaiveDateTime> = column(row, "date_fin")?;

    Ok(Mission {
        id: MissionId::new(column(row, "id")?),
        start_date,
        end_date,
        description: column(row, "description")?,
        driver_id: DriverId::new(column(row, "id_chauffeur")?),
        carrier_id: column(row, "id_transpoteur")?,
        end_odometer: column(row, "kilometrage_arrive")?,
        start_odometer: column(row, "kilometrage_debut")?,
        status: column(row, "statut")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
        quote_id: column(row, "devis_id")?,
        vehicle_id: column(row, "vehicule_id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn decode_failure_marks_the_row_as_committed() {
        let err = decode_failure("kilometrage_debut", "mismatched types");

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(
            err.message,
            "Mission stored but column kilometrage_debut could not be decoded: mismatched types"
        );
        assert_eq!(
            err.details.get("column"),
            Some(&"kilometrage_debut".to_string())
        );
        assert_eq!(err.details.get("committed"), Some(&"true".to_string()));
    }
}
