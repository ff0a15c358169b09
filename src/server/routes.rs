use crate::server::{handlers, types::AppState};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: AppState, body_limit: usize) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/", get(handlers::index).post(handlers::classify_form))
        .route("/api/classify", post(handlers::classify_api))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
