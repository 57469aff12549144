//! Server initialization and routing.
//!
//! Builds the Axum router for the fruit routes, layers the logging and
//! method-override middleware, serves static assets from the configured
//! directory, and runs the listener with graceful shutdown.

use crate::config::ServerConfig;
use crate::middleware::{log_requests, method_override};
use crate::routes::{self, fruits};
use crate::state::AppState;
use crate::store::MongoFruitStore;
use axum::extract::Request;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Router, ServiceExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all fruit routes.
///
/// The router does not include the method-override middleware: that has to
/// run before route matching, so callers layer it around the finished router
/// (as [`start_server`] does). Static assets fall through to `ServeDir`, the
/// express.static equivalent.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(routes::root))
        .route("/fruits", get(fruits::index).post(fruits::create))
        .route("/fruits/seed", get(fruits::seed))
        .route("/fruits/new", get(fruits::new_form))
        .route("/fruits/{id}/edit", get(fruits::edit_form))
        .route(
            "/fruits/{id}",
            get(fruits::show)
                .put(fruits::update)
                .delete(fruits::destroy),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the fruits HTTP server.
///
/// Connects to MongoDB, builds the router, binds to the configured address
/// and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .init();

    // Connect the store and build shared state
    let store = MongoFruitStore::connect(&config.database_url, &config.database_name).await?;
    let state = AppState::new(config.clone(), Arc::new(store));

    let router = build_router(state);
    let app = from_fn(method_override).layer(router);

    let addr: SocketAddr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("fruits server listening on {addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("received SIGTERM, shutting down..."),
    }
}
