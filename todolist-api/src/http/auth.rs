// Authentication HTTP handlers

use axum::{extract::State, http::StatusCode};

use super::{AppResult, AppState};

/// Register a new user
///
/// Placeholder: the route is wired up but registration is not implemented
/// yet. Responds with an empty 200 so callers can distinguish a deployed
/// route from a missing one.
pub async fn register(State(_state): State<AppState>) -> AppResult<StatusCode> {
    Ok(StatusCode::OK)
}

/// Login with username and password
///
/// Placeholder: not implemented yet; responds with an empty 200.
pub async fn login(State(_state): State<AppState>) -> AppResult<StatusCode> {
    Ok(StatusCode::OK)
}
