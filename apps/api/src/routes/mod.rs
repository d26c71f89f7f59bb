pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/voices", get(handlers::handle_voices))
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .route(
            "/api/v1/recommendations/narration",
            post(handlers::handle_narration),
        )
        .route(
            "/api/v1/recommendations/speech",
            post(handlers::handle_speech),
        )
        .route(
            "/api/v1/recommendations/summary",
            post(handlers::handle_summary),
        )
        .with_state(state)
}
