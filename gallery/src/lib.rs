//! # Gallery backend
//!
//! Backend for a single-page, passphrase-gated profile gallery. The page
//! shows a lock screen until the shared passphrase is accepted, then a
//! static grid of profile cards; this server is what that page talks to.
//!
//! The passphrase is a courtesy for a small trusted group, not an access
//! control: comparison is plain string equality, there is no lockout, no
//! rate limiting and no per-user identity. Do not put anything behind it
//! that actually needs protecting.
//!
//! One process serves one viewing session. The unlocked flag lives in
//! memory only, so a restart locks the gallery again the same way a page
//! refresh did in the original single-page rendition. Nothing is
//! persisted, nothing is fetched at request time; the roster and the
//! passphrase are start-time configuration.
//!
//! # Configuration
//!
//! - `GALLERY_PORT` (default 8080)
//! - `ROSTER_PATH` (default `roster.json`), a JSON array of entries
//! - `REVIEW_DELAY_MS` (default 300), the cosmetic lock-screen delay
//! - `GALLERY_PASSPHRASE`, or the `/run/secrets/GALLERY_PASSPHRASE` file

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal, sync::broadcast::error::RecvError};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod gate;
pub mod routes;
pub mod state;
pub mod view;

use routes::{gallery_handler, status_handler, unlock_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    spawn_notice_logger(&state);

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/unlock", post(unlock_handler))
        .route("/gallery", get(gallery_handler))
        .route("/status", get(status_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

/// Ambient notification surface on the server side: denials land in the
/// log, the page shows its own toast from the 401 body.
fn spawn_notice_logger(state: &Arc<AppState>) {
    let mut notices = state.gate.subscribe();

    tokio::spawn(async move {
        loop {
            match notices.recv().await {
                Ok(notice) => warn!("{}: {}", notice.title, notice.detail),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
