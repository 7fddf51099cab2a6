pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::demo::handlers as demo;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(pages::handle_current_page))
        .route("/pages/:slug", get(pages::handle_select_page))
        .route("/projects/:slug/open", post(pages::handle_open_project))
        .route("/demo", post(demo::handle_demo_form).layer(upload_limit))
        // JSON API
        .route("/api/v1/view", get(pages::handle_get_view))
        .route("/api/v1/navigation", put(pages::handle_navigate))
        .route("/api/v1/demo", post(demo::handle_demo_api))
        .with_state(state)
}
