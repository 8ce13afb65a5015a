pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::{get, post},
    Router,
};

use crate::parsing::handlers as parsing_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/health") }))
        .route("/health", get(health::health_handler))
        // Parsing API
        .route(
            "/upload",
            post(parsing_handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/parse", post(parsing_handlers::handle_parse))
        // Scoring API
        .route("/score", post(scoring_handlers::handle_score))
        .route(
            "/score/whitelist",
            post(scoring_handlers::handle_score_whitelist),
        )
        .with_state(state)
}
