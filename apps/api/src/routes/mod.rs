pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::merit::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_form_event),
        )
        // JSON API
        .route(
            "/api/v1/merit/prompt",
            post(handlers::handle_preview_prompt),
        )
        .route("/api/v1/merit/generate", post(handlers::handle_generate))
        .with_state(state)
}
