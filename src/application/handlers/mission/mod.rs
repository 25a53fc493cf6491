//! Mission command handlers.

mod create_mission;

pub use create_mission::{
    CreateMissionCommand, CreateMissionHandler, CreateMissionResult, FanOutSettings,
};
