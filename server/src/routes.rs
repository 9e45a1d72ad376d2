use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use super::{auth, bookings, salons, state::AppState};

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api", get(banner_handler))
        .route("/api/auth/register", post(auth::register_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/profile", get(auth::profile_handler))
        .route("/api/salons", get(salons::search_handler))
        .route("/api/salons/{id}", get(salons::detail_handler))
        .route("/api/bookings", post(bookings::create_handler))
        .route("/api/bookings/me", get(bookings::my_bookings_handler))
        .route("/api/bookings/{id}", get(bookings::booking_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.started.elapsed().as_secs_f64(),
    }))
}

async fn banner_handler() -> impl IntoResponse {
    Json(json!({
        "message": "SalonConnect API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "auth": "/api/auth/*",
            "salons": "/api/salons/*",
            "bookings": "/api/bookings/*",
        },
    }))
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
