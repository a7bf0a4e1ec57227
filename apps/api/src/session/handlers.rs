//! Axum route handlers for the session and the rendered document.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};

use crate::errors::AppError;
use crate::render::{html::render_document, render_series, Page};
use crate::session::SessionSnapshot;
use crate::state::AppState;

/// GET /api/v1/series
pub async fn handle_get_series(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// POST /api/v1/series/reset
///
/// Back to Idle, dropping any document and error. 409 while generating.
pub async fn handle_reset(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.session.reset().await?))
}

/// GET /api/v1/series/pages
///
/// The page model: cover followed by one page per week. 404 unless Viewing.
pub async fn handle_get_pages(State(state): State<AppState>) -> Result<Json<Vec<Page>>, AppError> {
    let doc = state.session.document().await?;
    let pages = render_series(
        &doc.series,
        doc.generated_at.date_naive(),
        &state.page_config,
    );
    Ok(Json(pages))
}

/// GET /api/v1/series/print
///
/// Print-ready HTML for the browser's print/PDF dialog. 404 unless Viewing.
pub async fn handle_print(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let doc = state.session.document().await?;
    let pages = render_series(
        &doc.series,
        doc.generated_at.date_naive(),
        &state.page_config,
    );
    Ok(Html(render_document(&pages, &state.page_config)))
}
