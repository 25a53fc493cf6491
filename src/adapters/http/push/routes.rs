//! HTTP routes for push endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{save_subscription, vapid_public_key, PushHandlers};

/// Creates the push router with all endpoints.
pub fn push_routes(handlers: PushHandlers) -> Router {
    Router::new()
        .route("/vapidPublicKey", get(vapid_public_key))
        .route("/api/save-subscription", post(save_subscription))
        .with_state(handlers)
}
