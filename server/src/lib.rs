//! # SalonConnect API
//!
//! Salon discovery and appointment booking backend.
//!
//! # General Infrastructure
//! - Single axum process in front of a SQLite catalog
//! - JSON in/out; success payloads wrapped in `{success, data, message?}`
//! - Bearer-token auth (HS256) on the booking and profile surface
//! - The salon listing never hard-fails: when the catalog is unreachable it
//!   answers with a fixed demo payload so the client always has something to
//!   render
//!
//! # Surface
//!
//! | Route | Auth | Purpose |
//! |---|---|---|
//! | `GET /health` | no | liveness probe |
//! | `GET /api` | no | service banner |
//! | `GET /api/salons` | no | search/rank salons |
//! | `GET /api/salons/{id}` | no | salon detail with reviews + schedules |
//! | `POST /api/auth/register` | no | create account, returns token |
//! | `POST /api/auth/login` | no | verify credentials, returns token |
//! | `GET /api/auth/profile` | yes | own profile |
//! | `POST /api/bookings` | yes | create appointment |
//! | `GET /api/bookings/me` | yes | own appointments |
//! | `GET /api/bookings/{id}` | yes | own appointment by id |
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod auth;
pub mod bookings;
pub mod config;
pub mod docs;
pub mod error;
pub mod payloads;
pub mod routes;
pub mod salons;
pub mod search;
pub mod state;
pub mod validate;

use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");
    let app = routes::router(state.clone());

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
