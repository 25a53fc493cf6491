//! Mission Relay - mission creation with notification fan-out.
//!
//! A created mission is persisted, then announced on three best-effort
//! channels: a realtime topic for the assigned driver, browser web push to
//! every registered subscription, and one WhatsApp text message.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
