//! HTTP adapter for browser push subscription endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::MessageResponse;
pub use handlers::PushHandlers;
pub use routes::push_routes;
