//! Server lifecycle management
//!
//! Binds the HTTP listener and serves the API router until a shutdown
//! signal arrives.

use anyhow::Result;
use sqlx::MySqlPool;
use tracing::{error, info};

use todolist_core::Config;

/// Bind the configured address and serve until ctrl-c.
pub async fn run(config: &Config, pool: MySqlPool) -> Result<()> {
    let router = todolist_api::create_router(pool);

    let http_addr = config.http_address();
    let listener = match tokio::net::TcpListener::bind(&http_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind HTTP address {}: {}", http_addr, e);
            return Err(e.into());
        }
    };
    info!("HTTP server listening on {}", http_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
