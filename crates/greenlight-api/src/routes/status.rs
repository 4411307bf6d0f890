//! Status endpoints backed by the aggregator.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::AppState;
use crate::error::ApiError;
use greenlight_core::SummaryEntry;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(all_statuses))
        .route("/repos/{id}/status", get(repo_status))
}

async fn repo_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.aggregator.detailed_status(&id).await? {
        Some(status) => Ok(Json(status).into_response()),
        // Unrecognized platform: no status to report, by contract not an error.
        None => Ok(Json(json!({})).into_response()),
    }
}

async fn all_statuses(State(state): State<AppState>) -> Json<Vec<SummaryEntry>> {
    Json(state.aggregator.summary().await)
}
