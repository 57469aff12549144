//! Fruits server - a server-rendered CRUD app over a single fruit resource.
//!
//! Routes map HTTP verb/path pairs onto a document store and respond by
//! rendering HTML, redirecting back to the listing, or (for the seed route)
//! emitting JSON:
//!
//! - `GET /` - liveness text
//! - `GET /fruits` - list view
//! - `GET /fruits/seed` - reset to the five starter records, respond with JSON
//! - `GET /fruits/new` - create form
//! - `POST /fruits` - create, redirect to `/fruits`
//! - `GET /fruits/{id}` - detail view
//! - `GET /fruits/{id}/edit` - edit form
//! - `PUT /fruits/{id}` - full replace, redirect to `/fruits`
//! - `DELETE /fruits/{id}` - delete, redirect to `/fruits`
//!
//! PUT and DELETE are tunneled over POST with a `_method` form field, since
//! HTML forms only emit GET and POST. Persistence goes through the
//! [`store::FruitStore`] trait; the MongoDB backend is the real one and an
//! in-memory backend serves tests.

pub mod config;
pub mod error;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod views;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::AppState;
