pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/screenings", post(handlers::handle_create_screening))
        .route(
            "/api/v1/screenings/keywords",
            post(handlers::handle_extract_keywords),
        )
        .route(
            "/api/v1/screenings/score",
            post(handlers::handle_score_pair),
        )
        .layer(body_limit)
        .with_state(state)
}
