//! Repository registry endpoints.

use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::AppState;
use greenlight_core::{Platform, RepoRecord};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/repos", get(list_repos).post(add_repo))
        .route("/repos/{id}", delete(remove_repo))
}

async fn list_repos(State(state): State<AppState>) -> Json<Vec<RepoRecord>> {
    Json(state.registry.list())
}

#[derive(Debug, Deserialize)]
pub struct AddRepoRequest {
    pub platform: Platform,
    pub owner: String,
    pub name: String,
    pub token: String,
}

async fn add_repo(
    State(state): State<AppState>,
    Json(req): Json<AddRepoRequest>,
) -> Json<Value> {
    let repo = state
        .registry
        .add(req.platform, req.owner, req.name, req.token);

    Json(json!({ "success": true, "repo": repo }))
}

async fn remove_repo(State(state): State<AppState>, Path(id): Path<String>) -> Json<Value> {
    state.registry.remove(&id);

    Json(json!({ "success": true }))
}
