//! The two submission endpoints.
//!
//! Neither endpoint validates its payload: any JSON body is accepted and
//! absent fields land in the sheet as empty cells, matching the live
//! site. Every sink failure collapses to the same generic 500.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use openday_core::{RegistrationRecord, SurveyResponse};
use serde_json::{Value, json};
use tracing::error;

use crate::state::AppState;

/// `POST /api/about-you` — append one survey row.
pub async fn about_you_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let response: SurveyResponse = serde_json::from_value(body).unwrap_or_default();

    match state
        .sink
        .append_row(&state.survey_tab, response.row())
        .await
    {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Follow-up data saved successfully!" })),
        ),
        Err(e) => {
            error!(error = %e, "failed to save follow-up data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save follow-up data." })),
            )
        }
    }
}

/// `POST /api/register` — append one registration row.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let record: RegistrationRecord = serde_json::from_value(body).unwrap_or_default();

    match state
        .sink
        .append_row(&state.registration_tab, record.row())
        .await
    {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Registration saved successfully!" })),
        ),
        Err(e) => {
            error!(error = %e, "failed to save registration");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save registration." })),
            )
        }
    }
}
