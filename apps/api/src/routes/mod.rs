pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::diff::handlers::{handle_diff, handle_render};
use crate::optimize::handlers::handle_optimize;
use crate::state::AppState;

/// API routes plus the single-page front end. Any path that is not an API
/// route or an existing asset gets `index.html`.
pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir);
    let front_end =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/optimize", post(handle_optimize))
        .route("/api/diff", post(handle_diff))
        .route("/api/render", post(handle_render))
        .fallback_service(front_end)
        .with_state(state)
}
