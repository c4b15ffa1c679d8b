//! # Lifeweb Server
//!
//! Serves successive Game of Life generations over HTTP.
//!
//! One shared [`Session`] sits behind a mutex, so concurrent requests each
//! advance it by exactly one generation in turn.

pub mod handlers;
pub mod middleware;

use axum::{routing::get, Router};
use lifeweb_core::Session;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;

/// Server state shared by all handlers.
pub struct AppState {
    session: Mutex<Session>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(session: Session) -> SharedState {
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }

    /// Locks the session, recovering it if a previous holder panicked.
    pub fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Session mutex was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

/// Bare routes without any decorators.
pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/nextstate", get(handlers::next_state))
        .with_state(state)
}

/// Routes wrapped in the default pipeline.
pub fn app(state: SharedState) -> Router {
    middleware::decorate(routes(state), middleware::default_pipeline())
}

/// Serves until `shutdown` resolves, then lets in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Lifeweb server listening on {}", addr);
        tracing::info!("    Next state: http://{}/nextstate", addr);
    }
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
