//! Axum route handlers for the parameter collector and submission.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::form::{
    clamp_duration, DurationStep, GeneratorForm, GeneratorParams, MAX_DURATION, MIN_DURATION,
    PRESET_TOPICS,
};
use crate::models::Audience;
use crate::session::SessionSnapshot;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub defaults: GeneratorForm,
    pub audiences: Vec<Audience>,
    pub preset_topics: Vec<&'static str>,
    pub min_duration: u8,
    pub max_duration: u8,
}

#[derive(Debug, Deserialize)]
pub struct DurationRequest {
    pub duration: i64,
    pub step: DurationStep,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DurationResponse {
    pub duration: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/form
pub async fn handle_get_form() -> Json<FormResponse> {
    Json(FormResponse {
        defaults: GeneratorForm::default(),
        audiences: Audience::ALL.to_vec(),
        preset_topics: PRESET_TOPICS.to_vec(),
        min_duration: MIN_DURATION,
        max_duration: MAX_DURATION,
    })
}

/// POST /api/v1/form/duration
///
/// Applies one increment/decrement step and returns the clamped duration.
pub async fn handle_adjust_duration(Json(request): Json<DurationRequest>) -> Json<DurationResponse> {
    let mut form = GeneratorForm {
        duration: clamp_duration(request.duration),
        ..Default::default()
    };
    form.adjust_duration(request.step);
    Json(DurationResponse {
        duration: form.duration,
    })
}

/// POST /api/v1/series/generate
///
/// Flips the session to Generating and returns immediately; the model call
/// runs in the background. Poll GET /api/v1/series for the outcome.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(params): Json<GeneratorParams>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let request = GeneratorForm::from(params).submit()?;
    let submission = state.session.submit(request).await?;
    Ok((StatusCode::ACCEPTED, Json(submission.snapshot)))
}
