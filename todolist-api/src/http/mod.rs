// Module: http
// HTTP/JSON REST surface: route registration and shared state

pub mod auth;
pub mod error;
pub mod health;
pub mod todos;

use axum::{
    routing::{any, post},
    Router,
};
use sqlx::MySqlPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{AppError, AppResult};

/// Shared application state
///
/// The database pool is owned here and handed to handlers through axum
/// state rather than living in a process-global.
#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
}

/// Create the HTTP router with all routes
///
/// `/login`, `/to-dos`, and `/to-dos/{id}` accept any method; only
/// `/register` is restricted to POST.
pub fn create_router(pool: MySqlPool) -> Router {
    let state = AppState { pool };

    let router = Router::new()
        .merge(health::create_health_router())
        // Auth routes
        .route("/register", post(auth::register))
        .route("/login", any(auth::login))
        // To-do routes
        .route("/to-dos", any(todos::todos))
        .route("/to-dos/{id}", any(todos::todo_item));

    // Apply layers before state
    let router = router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Apply state to all routes (must be last)
    router.with_state(state)
}
