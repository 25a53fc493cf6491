//! WebSocket upgrade handler for the mission channel.
//!
//! Connection lifecycle:
//! 1. Upgrade to WebSocket and record the session
//! 2. Subscribe to the realtime hub
//! 3. Forward hub events and replies until either side closes
//! 4. Record the disconnection

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use serde_json::Value;
use tokio::sync::{broadcast, mpsc};

use crate::application::CreateMissionHandler;
use crate::domain::foundation::Timestamp;

use super::{
    hub::RealtimeHub,
    messages::{ClientMessage, CreateMissionRequest, EventFrame},
    sessions::{ClientId, SessionTracker},
};

/// Generic failure text; details stay in the server logs.
const CREATE_MISSION_FAILED: &str = "Erreur lors de la création de la mission.";

/// Replies queued per connection before senders wait.
const REPLY_BUFFER: usize = 32;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    pub hub: Arc<RealtimeHub>,
    pub sessions: Arc<SessionTracker>,
    pub create_mission: Arc<CreateMissionHandler>,
}

impl WebSocketState {
    pub fn new(
        hub: Arc<RealtimeHub>,
        sessions: Arc<SessionTracker>,
        create_mission: Arc<CreateMissionHandler>,
    ) -> Self {
        Self {
            hub,
            sessions,
            create_mission,
        }
    }
}

/// Handle WebSocket upgrade requests.
///
/// Route: `GET /ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WebSocketState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Runs for the lifetime of one connection.
async fn handle_socket(socket: WebSocket, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = ClientId::new();

    state.sessions.connect(&client_id).await;
    let mut hub_rx = state.hub.subscribe();

    let connected = EventFrame::connected(&client_id.to_string(), &Timestamp::now().to_rfc3339());
    if let Err(e) = send_frame(&mut sender, &connected).await {
        tracing::debug!(client_id = %client_id, "Failed to send connected frame: {}", e);
        state.sessions.disconnect(&client_id).await;
        return;
    }

    let (reply_tx, mut reply_rx) = mpsc::channel::<EventFrame>(REPLY_BUFFER);

    // Forward replies and hub events to the client
    let mut send_task = {
        let client_id = client_id.clone();
        tokio::spawn(async move {
            loop {
                let frame = tokio::select! {
                    Some(reply) = reply_rx.recv() => reply,
                    event = hub_rx.recv() => match event {
                        Ok(event) => EventFrame::from(event),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(client_id = %client_id, skipped, "Client lagging, topic events dropped");
                            continue;
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                };

                if let Err(e) = send_frame(&mut sender, &frame).await {
                    tracing::debug!(client_id = %client_id, "Send error, closing connection: {}", e);
                    break;
                }
            }
        })
    };

    // Handle incoming events; each createMission runs in its own task
    let mut recv_task = {
        let client_id = client_id.clone();
        let handler = state.create_mission.clone();
        tokio::spawn(async move {
            while let Some(result) = receiver.next().await {
                match result {
                    Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(ClientMessage::CreateMission(data)) => {
                            let handler = handler.clone();
                            let reply_tx = reply_tx.clone();
                            tokio::spawn(async move {
                                let reply = create_mission_reply(&handler, data).await;
                                // Requester may be gone already
                                let _ = reply_tx.send(reply).await;
                            });
                        }
                        Err(e) => {
                            tracing::debug!(client_id = %client_id, "Ignoring unrecognized event: {}", e);
                        }
                    },
                    Ok(Message::Binary(_)) => {
                        tracing::warn!(client_id = %client_id, "Received unsupported binary message");
                    }
                    Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
                    Ok(Message::Close(_)) => {
                        tracing::debug!(client_id = %client_id, "Client sent close frame");
                        break;
                    }
                    Err(e) => {
                        tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                        break;
                    }
                }
            }
        })
    };

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.sessions.disconnect(&client_id).await;
}

/// Runs one `createMission` request and builds the reply for the requester.
pub async fn create_mission_reply(handler: &CreateMissionHandler, data: Value) -> EventFrame {
    let request: CreateMissionRequest = match serde_json::from_value(data) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed createMission payload");
            return EventFrame::error_mission(CREATE_MISSION_FAILED);
        }
    };

    match handler.handle(request.into_command()).await {
        Ok(result) => match serde_json::to_value(&result.mission) {
            Ok(mission) => EventFrame::mission_created(mission),
            Err(e) => {
                tracing::error!(mission_id = %result.mission.id, error = %e, "Failed to encode mission");
                EventFrame::error_mission(CREATE_MISSION_FAILED)
            }
        },
        Err(e) => EventFrame::error_mission(e.user_message()),
    }
}

/// Send a JSON frame over the WebSocket.
async fn send_frame(
    sender: &mut SplitSink<WebSocket, Message>,
    frame: &EventFrame,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(frame).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Create axum router for the WebSocket endpoint.
pub fn websocket_router() -> axum::Router<WebSocketState> {
    use axum::routing::get;

    axum::Router::new().route("/ws", get(ws_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::adapters::storage::{InMemoryMissionRepository, InMemorySubscriptionRegistry};
    use crate::application::FanOutSettings;
    use crate::domain::notification::{PushNotification, PushSubscription};
    use crate::ports::{ChannelError, MessagingClient, PushDeliveryClient};

    struct NoopPush;

    #[async_trait]
    impl PushDeliveryClient for NoopPush {
        async fn deliver(
            &self,
            _subscription: &PushSubscription,
            _notification: &PushNotification,
        ) -> Result<(), ChannelError> {
            Ok(())
        }
    }

    struct NoopMessaging;

    #[async_trait]
    impl MessagingClient for NoopMessaging {
        async fn send_text(&self, _recipient: &str, _body: &str) -> Result<Value, ChannelError> {
            Ok(json!({"messages": []}))
        }
    }

    fn test_state() -> WebSocketState {
        let hub = Arc::new(RealtimeHub::new(16));
        let handler = CreateMissionHandler::new(
            Arc::new(InMemoryMissionRepository::new()),
            hub.clone(),
            Arc::new(InMemorySubscriptionRegistry::new()),
            Arc::new(NoopPush),
            Arc::new(NoopMessaging),
            FanOutSettings::default(),
        );
        WebSocketState::new(hub, Arc::new(SessionTracker::new()), Arc::new(handler))
    }

    #[tokio::test]
    async fn create_mission_reply_returns_stored_record() {
        let state = test_state();

        let reply = create_mission_reply(
            &state.create_mission,
            json!({"chauffeurId": 7, "transporteurId": 3, "description": "Livraison"}),
        )
        .await;

        assert_eq!(reply.event, "missionCreated");
        assert_eq!(reply.data["id_chauffeur"], 7);
        assert_eq!(reply.data["statut"], "Mission créée");
        assert_eq!(reply.data["kilometrage_debut"], 0);
    }

    #[tokio::test]
    async fn create_mission_reply_publishes_driver_topic() {
        let state = test_state();
        let mut rx = state.hub.subscribe();

        create_mission_reply(
            &state.create_mission,
            json!({"chauffeurId": 7, "transporteurId": 3}),
        )
        .await;

        let event = rx.recv().await.unwrap();
        assert_eq!(event.topic, "notifChauffeur_7");
    }

    #[tokio::test]
    async fn create_mission_reply_reports_missing_driver() {
        let state = test_state();

        let reply = create_mission_reply(&state.create_mission, json!({"transporteurId": 3})).await;

        assert_eq!(reply, EventFrame::error_mission(CREATE_MISSION_FAILED));
    }

    #[tokio::test]
    async fn create_mission_reply_reports_malformed_payload() {
        let state = test_state();

        let reply =
            create_mission_reply(&state.create_mission, json!(["chauffeurId", 7])).await;

        assert_eq!(reply, EventFrame::error_mission(CREATE_MISSION_FAILED));
    }

    #[tokio::test]
    async fn create_mission_reply_accepts_integers_sent_as_text() {
        let state = test_state();

        let reply = create_mission_reply(
            &state.create_mission,
            json!({"chauffeurId": "7", "transporteurId": "3", "kilometrageDebut": "1200"}),
        )
        .await;

        assert_eq!(reply.event, "missionCreated");
        assert_eq!(reply.data["id_chauffeur"], 7);
        assert_eq!(reply.data["kilometrage_debut"], 1200);
    }

    #[tokio::test]
    async fn create_mission_reply_reports_non_numeric_driver_from_storage() {
        let state = test_state();

        let reply = create_mission_reply(
            &state.create_mission,
            json!({"chauffeurId": "sept", "transporteurId": 3}),
        )
        .await;

        assert_eq!(reply, EventFrame::error_mission(CREATE_MISSION_FAILED));
    }

    #[test]
    fn websocket_router_creates_route() {
        let _router: axum::Router = websocket_router().with_state(test_state());
    }
}
