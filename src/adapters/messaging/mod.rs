//! Messaging Adapters.
//!
//! Implementations of the MessagingClient port.
//!
//! ## Available Adapters
//!
//! - `WhatsAppClient` - WhatsApp Business Cloud API text messages

mod whatsapp;

pub use whatsapp::{WhatsAppClient, WhatsAppConfig};
