//! HTTP route handlers.
//!
//! `fruits` holds one handler per (verb, path) pair of the fruit resource;
//! the root handler is a plain liveness text.

pub mod fruits;

/// Root liveness endpoint (GET /).
pub async fn root() -> &'static str {
    "your server is running... better catch it."
}
