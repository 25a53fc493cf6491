//! Mission module - transport assignments and the texts announcing them.

mod errors;
mod notices;
mod record;

pub use errors::MissionError;
pub use notices::{driver_notice, driver_topic, messaging_text, DRIVER_TOPIC_PREFIX};
pub use record::{IntegerInput, Mission, NewMission, DEFAULT_STATUS};
