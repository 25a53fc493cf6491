//! HTTP handlers for push endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::application::RegisterSubscriptionHandler;
use crate::domain::notification::PushSubscription;

use super::dto::MessageResponse;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PushHandlers {
    register_handler: Arc<RegisterSubscriptionHandler>,
    vapid_public_key: Arc<str>,
}

impl PushHandlers {
    pub fn new(
        register_handler: Arc<RegisterSubscriptionHandler>,
        vapid_public_key: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            register_handler,
            vapid_public_key: vapid_public_key.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /vapidPublicKey - Public key browsers subscribe with
pub async fn vapid_public_key(State(handlers): State<PushHandlers>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        handlers.vapid_public_key.to_string(),
    )
        .into_response()
}

/// POST /api/save-subscription - Register a push descriptor
///
/// New and already-known descriptors get the same answer.
pub async fn save_subscription(
    State(handlers): State<PushHandlers>,
    Json(body): Json<Value>,
) -> Response {
    handlers
        .register_handler
        .handle(PushSubscription::new(body))
        .await;

    (StatusCode::CREATED, Json(MessageResponse::subscription_saved())).into_response()
}
