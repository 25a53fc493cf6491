//! In-Memory Mission Repository
//!
//! Stands in for PostgreSQL in tests and local runs. It assigns sequential
//! identifiers and server timestamps, and rejects dates and integers the way
//! the database casts would, so callers see the same failure surface.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, DriverId, MissionId, Timestamp};
use crate::domain::mission::{IntegerInput, Mission, NewMission};
use crate::ports::MissionRepository;

/// In-memory storage for missions
#[derive(Debug)]
pub struct InMemoryMissionRepository {
    missions: RwLock<Vec<Mission>>,
    next_id: AtomicI32,
}

impl InMemoryMissionRepository {
    pub fn new() -> Self {
        Self {
            missions: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// All stored missions, oldest first.
    pub async fn missions(&self) -> Vec<Mission> {
        self.missions.read().await.clone()
    }

    /// Get the number of stored missions
    pub async fn count(&self) -> usize {
        self.missions.read().await.len()
    }
}

impl Default for InMemoryMissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MissionRepository for InMemoryMissionRepository {
    async fn insert(&self, mission: &NewMission) -> Result<Mission, DomainError> {
        let start_date = parse_date("date_debut", mission.start_date.as_deref())?;
        let end_date = parse_date("date_fin", mission.end_date.as_deref())?;
        let driver_id = parse_integer("id_chauffeur", &mission.driver_id)?;
        let carrier_id = parse_integer("id_transpoteur", &mission.carrier_id)?;
        let end_odometer = parse_integer("kilometrage_arrive", &mission.end_odometer)?;
        let start_odometer = parse_integer("kilometrage_debut", &mission.start_odometer)?;
        let quote_id = mission
            .quote_id
            .as_ref()
            .map(|raw| parse_integer("devis_id", raw))
            .transpose()?;
        let vehicle_id = mission
            .vehicle_id
            .as_ref()
            .map(|raw| parse_integer("vehicule_id", raw))
            .transpose()?;

        let now = Timestamp::now();
        let stored = Mission {
            id: MissionId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            start_date,
            end_date,
            description: mission.description.clone(),
            driver_id: DriverId::new(driver_id),
            carrier_id,
            end_odometer,
            start_odometer,
            status: mission.status.clone(),
            created_at: now,
            updated_at: now,
            quote_id,
            vehicle_id,
        };

        self.missions.write().await.push(stored.clone());
        Ok(stored)
    }
}

/// Accepts the textual forms PostgreSQL casts to `timestamp`.
fn parse_date(column: &str, raw: Option<&str>) -> Result<Option<NaiveDateTime>, DomainError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.naive_utc()));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(dt));
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(dt));
    }

    Err(DomainError::database(format!(
        "invalid input syntax for type timestamp: \"{}\"",
        raw
    ))
    .with_detail("column", column))
}

/// Accepts what PostgreSQL's `integer` cast accepts: optional sign, digits,
/// surrounding whitespace, within `i32` range.
fn parse_integer(column: &str, raw: &IntegerInput) -> Result<i32, DomainError> {
    let text = raw.as_text();
    text.trim().parse::<i32>().map_err(|_| {
        DomainError::database(format!(
            "invalid input syntax for type integer: \"{}\"",
            text
        ))
        .with_detail("column", column)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;

    fn new_mission() -> NewMission {
        let mut mission = NewMission::new(7, 3);
        mission.start_date = Some("2024-01-01".to_string());
        mission.end_date = Some("2024-01-02T18:30:00".to_string());
        mission
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_timestamps() {
        let repo = InMemoryMissionRepository::new();

        let first = repo.insert(&new_mission()).await.unwrap();
        let second = repo.insert(&new_mission()).await.unwrap();

        assert_eq!(first.id, MissionId::new(1));
        assert_eq!(second.id, MissionId::new(2));
        assert_eq!(first.created_at, first.updated_at);
        assert!(second.created_at >= first.created_at);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn insert_parses_dates() {
        let repo = InMemoryMissionRepository::new();

        let stored = repo.insert(&new_mission()).await.unwrap();

        assert_eq!(
            stored.start_date.unwrap().to_string(),
            "2024-01-01 00:00:00"
        );
        assert_eq!(stored.end_date.unwrap().to_string(), "2024-01-02 18:30:00");
    }

    #[tokio::test]
    async fn insert_rejects_unparseable_date() {
        let repo = InMemoryMissionRepository::new();
        let mut mission = new_mission();
        mission.start_date = Some("next tuesday".to_string());

        let err = repo.insert(&mission).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.details.get("column"), Some(&"date_debut".to_string()));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn insert_casts_integers_sent_as_text() {
        let repo = InMemoryMissionRepository::new();
        let mut mission = NewMission::new("7", " 3 ");
        mission.start_odometer = IntegerInput::from("1200");
        mission.quote_id = Some(IntegerInput::new(json!("42")));

        let stored = repo.insert(&mission).await.unwrap();

        assert_eq!(stored.driver_id, DriverId::new(7));
        assert_eq!(stored.carrier_id, 3);
        assert_eq!(stored.start_odometer, 1200);
        assert_eq!(stored.end_odometer, 0);
        assert_eq!(stored.quote_id, Some(42));
        assert_eq!(stored.vehicle_id, None);
    }

    #[tokio::test]
    async fn insert_rejects_non_numeric_odometer() {
        let repo = InMemoryMissionRepository::new();
        let mut mission = new_mission();
        mission.start_odometer = IntegerInput::from("abc");

        let err = repo.insert(&mission).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "invalid input syntax for type integer: \"abc\"");
        assert_eq!(
            err.details.get("column"),
            Some(&"kilometrage_debut".to_string())
        );
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn insert_rejects_fractional_and_boolean_ids() {
        let repo = InMemoryMissionRepository::new();

        let fractional = NewMission::new(IntegerInput::new(json!(7.5)), 3);
        let err = repo.insert(&fractional).await.unwrap_err();
        assert_eq!(err.details.get("column"), Some(&"id_chauffeur".to_string()));

        let boolean = NewMission::new(7, IntegerInput::new(json!(true)));
        let err = repo.insert(&boolean).await.unwrap_err();
        assert_eq!(
            err.details.get("column"),
            Some(&"id_transpoteur".to_string())
        );

        assert_eq!(repo.count().await, 0);
    }
}
