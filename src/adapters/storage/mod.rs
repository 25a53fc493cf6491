//! Storage Adapters
//!
//! In-process implementations of the storage-shaped ports.
//!
//! ## Available Adapters
//!
//! - **InMemorySubscriptionRegistry** - Push descriptors for the life of the process
//! - **InMemoryMissionRepository** - Mission store for tests and local development
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySubscriptionRegistry;
//!
//! let registry: Arc<dyn SubscriptionRegistry> = Arc::new(InMemorySubscriptionRegistry::new());
//! ```

mod in_memory_mission_repository;
mod in_memory_subscription_registry;

pub use in_memory_mission_repository::InMemoryMissionRepository;
pub use in_memory_subscription_registry::InMemorySubscriptionRegistry;
