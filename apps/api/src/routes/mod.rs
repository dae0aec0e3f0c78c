pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/letters/extract-sections",
            post(handlers::handle_extract_sections),
        )
        .route("/api/v1/letters/generate", post(handlers::handle_generate))
        .with_state(state)
}
