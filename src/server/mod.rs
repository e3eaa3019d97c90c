mod error;
mod handlers;
mod state;


use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::conversation::SessionStore;

pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/questions", get(handlers::questions))
        .route("/api/chat", post(handlers::chat))
        .route("/api/report/{session_id}", get(handlers::download_report))
        .route(
            "/api/download_pdf/{session_id}",
            get(handlers::download_report),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState, sweep_every: Option<Duration>) -> Result<()> {
    let sweeper = sweep_every.map(|period| spawn_sweeper(Arc::clone(&state.sessions), period));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to read bound address")?;
    info!(addr = %local_addr, "fir intake server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    info!("fir intake server stopped");
    Ok(())
}

fn spawn_sweeper(sessions: Arc<dyn SessionStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick fires immediately.
        tick.tick().await;
        loop {
            tick.tick().await;
            let evicted = sessions.evict_expired(std::time::Instant::now());
            if evicted > 0 {
                info!(evicted, remaining = sessions.len(), "evicted idle sessions");
            } else {
                debug!(remaining = sessions.len(), "session sweep found nothing to evict");
            }
        }
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c; shutting down");
        return;
    }
    info!("shutdown requested");
}
