//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Mission persistence
//! - `storage` - In-process registry and mission store
//! - `push` - Browser web push
//! - `messaging` - WhatsApp Cloud API
//! - `websocket` - Realtime channel and session tracking
//! - `http` - REST endpoints

pub mod http;
pub mod messaging;
pub mod postgres;
pub mod push;
pub mod storage;
pub mod websocket;
