//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `MissionRepository` - Inserts missions and returns the stored record
//!
//! ## Notification Channels
//!
//! - `RealtimePublisher` - Topic broadcast to connected sessions
//! - `SubscriptionRegistry` - Deduplicated browser push descriptors
//! - `PushDeliveryClient` - Browser push delivery to one descriptor
//! - `MessagingClient` - Third-party messaging API
//!
//! Channel calls share `ChannelError`; none of them can fail a mission.

mod channel_error;
mod messaging_client;
mod mission_repository;
mod push_delivery;
mod realtime_publisher;
mod subscription_registry;

pub use channel_error::ChannelError;
pub use messaging_client::MessagingClient;
pub use mission_repository::MissionRepository;
pub use push_delivery::PushDeliveryClient;
pub use realtime_publisher::RealtimePublisher;
pub use subscription_registry::SubscriptionRegistry;
