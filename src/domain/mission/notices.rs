//! Texts and payloads announcing a newly created mission.

use serde_json::{json, Value};

use crate::domain::foundation::DriverId;

use super::Mission;

/// Prefix of the per-driver real-time topic.
pub const DRIVER_TOPIC_PREFIX: &str = "notifChauffeur_";

const MISSING: &str = "-";

/// Topic name addressed to one driver, e.g. `notifChauffeur_7`.
pub fn driver_topic(driver_id: DriverId) -> String {
    format!("{}{}", DRIVER_TOPIC_PREFIX, driver_id)
}

/// Payload published on the driver topic: `{message, missionId, mission}`.
pub fn driver_notice(mission: &Mission) -> Value {
    json!({
        "message": format!("Nouvelle mission créée avec le numéro {}", mission.id),
        "missionId": mission.id,
        "mission": mission,
    })
}

/// Text message sent through the messaging provider.
pub fn messaging_text(mission: &Mission) -> String {
    let start = mission
        .start_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let end = mission
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let vehicle = mission
        .vehicle_id
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string());

    format!(
        "🚚 Nouvelle mission :\n\n\
         📝 Description : {}\n\
         📅 Début : {}\n\
         📅 Fin : {}\n\
         🚛 Véhicule : {}\n\
         📌 Statut : {}\n\n\
         Merci de vérifier votre mission.",
        mission.description.as_deref().unwrap_or(MISSING),
        start,
        end,
        vehicle,
        mission.status,
    )
}
