//! Liveness endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::adapters::websocket::SessionTracker;
use crate::ports::SubscriptionRegistry;

#[derive(Clone)]
pub struct HealthState {
    sessions: Arc<SessionTracker>,
    registry: Arc<dyn SubscriptionRegistry>,
}

impl HealthState {
    pub fn new(sessions: Arc<SessionTracker>, registry: Arc<dyn SubscriptionRegistry>) -> Self {
        Self { sessions, registry }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_sessions: usize,
    pub subscriptions: usize,
}

/// GET /health
pub async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        active_sessions: state.sessions.active_count().await,
        subscriptions: state.registry.len().await,
    })
}

pub fn health_routes(state: HealthState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::storage::InMemorySubscriptionRegistry;
    use crate::adapters::websocket::ClientId;
    use crate::domain::notification::PushSubscription;

    #[tokio::test]
    async fn health_reports_counts() {
        let sessions = Arc::new(SessionTracker::new());
        let registry = Arc::new(InMemorySubscriptionRegistry::new());
        sessions.connect(&ClientId::new()).await;
        registry
            .register(PushSubscription::new(json!({"endpoint": "e"})))
            .await;

        let app = health_routes(HealthState::new(sessions, registry));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            json!({"status": "ok", "activeSessions": 1, "subscriptions": 1})
        );
    }
}
