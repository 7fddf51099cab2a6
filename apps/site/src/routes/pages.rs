//! Axum route handlers for page navigation.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::html::render_document;
use crate::pages::view::View;
use crate::pages::PageId;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub page: PageId,
}

/// GET /
pub async fn handle_current_page(State(state): State<AppState>) -> Html<String> {
    let navigation = state.navigation.read().await;
    Html(render_document(&navigation.render(None)))
}

/// GET /pages/:slug
///
/// Sidebar menu selection.
pub async fn handle_select_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = PageId::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Page '{slug}' not found")))?;

    let mut navigation = state.navigation.write().await;
    navigation.select_page(page);
    Ok(Html(render_document(&navigation.render(None))))
}

/// POST /projects/:slug/open
///
/// Home-page card action. Redirects so the browser issues a fresh render.
pub async fn handle_open_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Redirect, AppError> {
    state.navigation.write().await.open_project(&slug)?;
    Ok(Redirect::to("/"))
}

/// GET /api/v1/view
pub async fn handle_get_view(State(state): State<AppState>) -> Json<View> {
    Json(state.navigation.read().await.render(None))
}

/// PUT /api/v1/navigation
pub async fn handle_navigate(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> Json<View> {
    let mut navigation = state.navigation.write().await;
    navigation.select_page(request.page);
    Json(navigation.render(None))
}
