pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers as screening;
use crate::sentiment::handlers as sentiment;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/screening", post(screening::handle_screening))
        .route(
            "/screening/detailed",
            post(screening::handle_detailed_screening),
        )
        .route("/sentiment", post(sentiment::handle_sentiment))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
