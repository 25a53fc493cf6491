//! WebSocket message types for the mission channel.
//!
//! Every frame, in both directions, is a JSON object `{"event", "data"}`:
//! - Server → Client: `connected`, `missionCreated`, `errorMission`, and
//!   topic events such as `notifChauffeur_<driverId>`
//! - Client → Server: `createMission`

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::application::CreateMissionCommand;
use crate::domain::mission::IntegerInput;

use super::hub::TopicEvent;

pub const EVENT_CONNECTED: &str = "connected";
pub const EVENT_MISSION_CREATED: &str = "missionCreated";
pub const EVENT_ERROR_MISSION: &str = "errorMission";

// ============================================
// Server → Client Messages
// ============================================

/// One outbound frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventFrame {
    pub event: String,
    pub data: Value,
}

impl EventFrame {
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Sent once when the connection is established.
    pub fn connected(client_id: &str, timestamp: &str) -> Self {
        Self::new(
            EVENT_CONNECTED,
            json!({ "clientId": client_id, "timestamp": timestamp }),
        )
    }

    /// Acknowledgment to the requester; `mission` is the stored record.
    pub fn mission_created(mission: Value) -> Self {
        Self::new(EVENT_MISSION_CREATED, mission)
    }

    /// Failure reply to the requester.
    pub fn error_mission(message: impl Into<String>) -> Self {
        Self::new(EVENT_ERROR_MISSION, json!({ "message": message.into() }))
    }
}

impl From<TopicEvent> for EventFrame {
    fn from(event: TopicEvent) -> Self {
        Self::new(event.topic, event.payload)
    }
}

// ============================================
// Client → Server Messages
// ============================================

/// All events that can be received from a client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "createMission")]
    CreateMission(Value),
}

/// Payload of `createMission`, using the client's field names.
///
/// Integer references are accepted as numbers or text and left for the
/// database to cast.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMissionRequest {
    #[serde(rename = "dateDebut")]
    pub start_date: Option<String>,
    #[serde(rename = "dateFin")]
    pub end_date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "chauffeurId")]
    pub driver_id: Option<IntegerInput>,
    #[serde(rename = "transporteurId")]
    pub carrier_id: Option<IntegerInput>,
    #[serde(rename = "kilometrageArrive")]
    pub end_odometer: Option<IntegerInput>,
    #[serde(rename = "kilometrageDebut")]
    pub start_odometer: Option<IntegerInput>,
    #[serde(rename = "statut")]
    pub status: Option<String>,
    #[serde(rename = "devisId")]
    pub quote_id: Option<IntegerInput>,
    #[serde(rename = "vehiculeId")]
    pub vehicle_id: Option<IntegerInput>,
}

impl CreateMissionRequest {
    pub fn into_command(self) -> CreateMissionCommand {
        CreateMissionCommand {
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            driver_id: self.driver_id,
            carrier_id: self.carrier_id,
            end_odometer: self.end_odometer,
            start_odometer: self.start_odometer,
            status: self.status,
            quote_id: self.quote_id,
            vehicle_id: self.vehicle_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    #[test]
    fn error_frame_serializes_with_message() {
        let frame = EventFrame::error_mission("Erreur lors de la création de la mission.");
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["event"], "errorMission");
        assert_eq!(
            json["data"]["message"],
            "Erreur lors de la création de la mission."
        );
    }

    #[test]
    fn topic_event_becomes_frame_named_after_topic() {
        let frame = EventFrame::from(TopicEvent {
            topic: "notifChauffeur_7".to_string(),
            payload: json!({"missionId": 3}),
            emitted_at: Timestamp::now(),
        });

        assert_eq!(frame.event, "notifChauffeur_7");
        assert_eq!(frame.data["missionId"], 3);
    }

    #[test]
    fn client_message_parses_create_mission() {
        let text = r#"{"event":"createMission","data":{"chauffeurId":7,"transporteurId":3}}"#;
        let msg: ClientMessage = serde_json::from_str(text).unwrap();

        let ClientMessage::CreateMission(data) = msg;
        assert_eq!(data["chauffeurId"], 7);
    }

    #[test]
    fn unknown_client_event_is_rejected() {
        let text = r#"{"event":"deleteMission","data":{}}"#;
        assert!(serde_json::from_str::<ClientMessage>(text).is_err());
    }

    #[test]
    fn request_maps_client_field_names_to_command() {
        let request: CreateMissionRequest = serde_json::from_value(json!({
            "dateDebut": "2024-01-01T08:00:00",
            "dateFin": null,
            "description": "Livraison",
            "chauffeurId": 7,
            "transporteurId": 3,
            "kilometrageDebut": 1200,
            "devisId": 9,
            "vehiculeId": 4
        }))
        .unwrap();

        let cmd = request.into_command();
        assert_eq!(cmd.start_date.as_deref(), Some("2024-01-01T08:00:00"));
        assert_eq!(cmd.end_date, None);
        assert_eq!(cmd.driver_id, Some(IntegerInput::from(7)));
        assert_eq!(cmd.carrier_id, Some(IntegerInput::from(3)));
        assert_eq!(cmd.start_odometer, Some(IntegerInput::from(1200)));
        assert_eq!(cmd.end_odometer, None);
        assert_eq!(cmd.status, None);
        assert_eq!(cmd.quote_id, Some(IntegerInput::from(9)));
        assert_eq!(cmd.vehicle_id, Some(IntegerInput::from(4)));
    }

    #[test]
    fn request_accepts_integers_sent_as_text() {
        let request: CreateMissionRequest = serde_json::from_value(json!({
            "chauffeurId": "7",
            "transporteurId": "3",
            "kilometrageDebut": "beaucoup"
        }))
        .unwrap();

        let cmd = request.into_command();
        assert_eq!(cmd.driver_id, Some(IntegerInput::from("7")));
        assert_eq!(cmd.carrier_id, Some(IntegerInput::from("3")));
        assert_eq!(cmd.start_odometer, Some(IntegerInput::from("beaucoup")));
    }
}
