//! WebSocket adapters for the realtime mission channel.
//!
//! ```text
//!  createMission ──► handler ──► CreateMissionHandler
//!                                   │ publish notifChauffeur_<id>
//!                                   ▼
//!                              RealtimeHub ──► every connected session
//! ```
//!
//! # Components
//!
//! - [`messages`] - Frame types in both directions
//! - [`hub`] - Topic broadcast, implements `RealtimePublisher`
//! - [`sessions`] - Connection tracking for observability
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod hub;
pub mod messages;
pub mod sessions;

pub use handler::{create_mission_reply, websocket_router, ws_handler, WebSocketState};
pub use hub::{RealtimeHub, TopicEvent};
pub use messages::{ClientMessage, CreateMissionRequest, EventFrame};
pub use sessions::{ClientId, SessionTracker};
