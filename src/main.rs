//! Mission Relay server binary.

use std::sync::Arc;

use axum::Router;
use http::{HeaderValue, Method};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mission_relay::adapters::http::{health_routes, push_routes, HealthState, PushHandlers};
use mission_relay::adapters::messaging::{WhatsAppClient, WhatsAppConfig};
use mission_relay::adapters::postgres::PostgresMissionRepository;
use mission_relay::adapters::push::{WebPushConfig, WebPushDeliveryClient};
use mission_relay::adapters::storage::InMemorySubscriptionRegistry;
use mission_relay::adapters::websocket::{
    websocket_router, RealtimeHub, SessionTracker, WebSocketState,
};
use mission_relay::application::{
    CreateMissionHandler, FanOutSettings, RegisterSubscriptionHandler,
};
use mission_relay::config::{AppConfig, ServerConfig};
use mission_relay::domain::notification::PushNotification;
use mission_relay::ports::SubscriptionRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("Database pool ready");

    // Adapters
    let hub = Arc::new(RealtimeHub::new(config.notifications.realtime_capacity));
    let sessions = Arc::new(SessionTracker::new());
    let registry: Arc<dyn SubscriptionRegistry> = Arc::new(InMemorySubscriptionRegistry::new());

    let push = WebPushDeliveryClient::new(
        WebPushConfig::new(
            config.push.vapid_public_key.clone(),
            config.push.vapid_private_key.expose_secret().clone(),
            config.push.vapid_subject.clone(),
        )
        .with_ttl(config.push.ttl_secs),
    )?;
    let vapid_public_key = push.public_key().to_string();

    let messaging = WhatsAppClient::new(
        WhatsAppConfig::new(
            config.messaging.access_token.expose_secret().clone(),
            config.messaging.phone_number_id.clone(),
        )
        .with_base_url(config.messaging.api_base_url.clone())
        .with_api_version(config.messaging.api_version.clone())
        .with_timeout(config.messaging.timeout()),
    )?;

    // Application
    let settings = FanOutSettings {
        push_notification: PushNotification::new(
            config.notifications.push_title.clone(),
            config.notifications.push_body.clone(),
            config.notifications.push_url.clone(),
        ),
        messaging_recipient: config.messaging.recipient.clone(),
        channel_timeout: config.notifications.channel_timeout(),
        report_capacity: config.notifications.report_capacity,
    };
    let create_mission = Arc::new(CreateMissionHandler::new(
        Arc::new(PostgresMissionRepository::new(pool)),
        hub.clone(),
        registry.clone(),
        Arc::new(push),
        Arc::new(messaging),
        settings,
    ));
    let register_subscription = Arc::new(RegisterSubscriptionHandler::new(registry.clone()));

    let app = Router::new()
        .merge(websocket_router().with_state(WebSocketState::new(
            hub,
            sessions.clone(),
            create_mission,
        )))
        .merge(push_routes(PushHandlers::new(
            register_subscription,
            vapid_public_key,
        )))
        .merge(health_routes(HealthState::new(sessions, registry)))
        .layer(cors_layer(&config.server)?)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Mission relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` overrides the configured filter; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Any origin when none is configured.
fn cors_layer(server: &ServerConfig) -> Result<CorsLayer, http::header::InvalidHeaderValue> {
    let origins = server.cors_origins_list();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(parsed)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
