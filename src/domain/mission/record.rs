//! Mission records.
//!
//! A `Mission` is what persistence hands back after the insert; its serde
//! field names are the stored column names, so the serialized record is the
//! exact payload clients receive in `missionCreated` and driver notices.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{DriverId, MissionId, Timestamp};

/// Status label given to a mission when the request does not carry one.
pub const DEFAULT_STATUS: &str = "Mission créée";

/// An integer column value exactly as the client sent it.
///
/// Clients send either JSON numbers or their text form (`7`, `"7"`). The
/// value is not interpreted here; persistence casts it and rejects what is
/// not an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntegerInput(Value);

impl IntegerInput {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Text handed to the database's integer cast.
    pub fn as_text(&self) -> String {
        match &self.0 {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl From<i32> for IntegerInput {
    fn from(value: i32) -> Self {
        Self(Value::from(value))
    }
}

impl From<&str> for IntegerInput {
    fn from(value: &str) -> Self {
        Self(Value::from(value))
    }
}

impl fmt::Display for IntegerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Creation input with presence checked and defaults applied.
///
/// Dates and integer references stay in their raw form; the persistence
/// layer is the authority on whether they parse.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMission {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub driver_id: IntegerInput,
    pub carrier_id: IntegerInput,
    pub end_odometer: IntegerInput,
    pub start_odometer: IntegerInput,
    pub status: String,
    pub quote_id: Option<IntegerInput>,
    pub vehicle_id: Option<IntegerInput>,
}

impl NewMission {
    /// Creation input for a driver/carrier pair with every optional field defaulted.
    pub fn new(driver_id: impl Into<IntegerInput>, carrier_id: impl Into<IntegerInput>) -> Self {
        Self {
            start_date: None,
            end_date: None,
            description: None,
            driver_id: driver_id.into(),
            carrier_id: carrier_id.into(),
            end_odometer: IntegerInput::from(0),
            start_odometer: IntegerInput::from(0),
            status: DEFAULT_STATUS.to_string(),
            quote_id: None,
            vehicle_id: None,
        }
    }
}

/// Stored mission as returned by persistence.
///
/// Never mutated after creation; the dispatcher only borrows it for the
/// duration of the fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    #[serde(rename = "date_debut")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(rename = "date_fin")]
    pub end_date: Option<NaiveDateTime>,
    pub description: Option<String>,
    #[serde(rename = "id_chauffeur")]
    pub driver_id: DriverId,
    // Column name carries a historical typo; it is part of the stored contract.
    #[serde(rename = "id_transpoteur")]
    pub carrier_id: i32,
    #[serde(rename = "kilometrage_arrive")]
    pub end_odometer: i32,
    #[serde(rename = "kilometrage_debut")]
    pub start_odometer: i32,
    #[serde(rename = "statut")]
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(rename = "devis_id")]
    pub quote_id: Option<i32>,
    #[serde(rename = "vehicule_id")]
    pub vehicle_id: Option<i32>,
}
