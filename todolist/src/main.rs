mod server;

use anyhow::Result;
use tracing::{error, info};

use todolist_core::{
    bootstrap::{ensure_schema, init_database, load_config},
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (fail fast on misconfigurations)
    let config = load_config()?;

    // 2. Initialize logging
    logging::init_logging(&config.logging)?;
    info!("todolist server starting...");
    info!("HTTP address: {}", config.http_address());

    // 3. Initialize database (connect with retry, ensure database exists)
    let pool = match init_database(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Exiting: database bootstrap failed: {}", e);
            return Err(e.into());
        }
    };

    // 4. Ensure schema. A half-created schema is not a state worth running
    // in, so this is fatal too.
    if let Err(e) = ensure_schema(&pool).await {
        error!("Exiting: schema creation failed: {}", e);
        return Err(e.into());
    }

    // 5. Serve HTTP until shutdown
    server::run(&config, pool).await
}
