// To-do HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::{AppResult, AppState};

/// List or create to-dos
///
/// Placeholder: not implemented yet; responds with an empty 200.
pub async fn todos(State(_state): State<AppState>) -> AppResult<StatusCode> {
    Ok(StatusCode::OK)
}

/// Fetch, update, or delete a single to-do by id
///
/// Placeholder: not implemented yet; responds with an empty 200.
pub async fn todo_item(
    State(_state): State<AppState>,
    Path(_id): Path<String>,
) -> AppResult<StatusCode> {
    Ok(StatusCode::OK)
}
