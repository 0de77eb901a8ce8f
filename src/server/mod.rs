//! MEMLOG - HTTP Front End
//! Translates HTTP requests into calls on a [`SharedLog`].
//!
//! ## Routes
//! - `POST /` with `{"record": {"value": "<base64>"}}` appends and replies `{"key": n}`
//! - `GET /` with `{"key": n}` replies `{"record": {...}}`, or 404
//! - `GET /` with no body replies `{"records": [...]}`
//! - `GET /metrics` replies with a plain-text counter report
//!
//! Any other path behaves like `/`.

pub mod error;
pub mod handlers;
pub mod messages;
pub mod request;
pub mod response;

use axum::Router;
use axum::routing::get;
use tokio::signal;

pub use self::error::{ApiError, ServerError};

use self::handlers::{
    AppState, handle_append, handle_get, handle_method_not_allowed, handle_metrics,
};
use crate::config::ServerConfig;
use crate::engine::concurrent::SharedLog;

/// Build the router serving `log`.
///
/// Every path other than `/metrics` reaches the log handlers.
pub fn router(log: SharedLog) -> Router {
    let log_routes = get(handle_get)
        .post(handle_append)
        .fallback(handle_method_not_allowed);

    Router::new()
        .route("/", log_routes.clone())
        .route("/{*path}", log_routes)
        .route("/metrics", get(handle_metrics))
        .with_state(AppState { log })
}

/// HTTP server for the record log.
pub struct LogServer {
    log: SharedLog,
    config: ServerConfig,
}

impl LogServer {
    /// Create a new server for an already-constructed log.
    pub fn new(log: SharedLog, config: ServerConfig) -> Self {
        Self { log, config }
    }

    /// Bind and serve until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        log::info!("memlog listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.log.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log::info!(
            "server shut down with {} records\n{}",
            self.log.len(),
            self.log.metrics().report()
        );
        Ok(())
    }
}

/// Resolve on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("received SIGINT, shutting down"),
        _ = terminate => log::info!("received SIGTERM, shutting down"),
    }
}
