//! Database initialization
//!
//! Bootstraps the MySQL database in stages: connect to the server as root
//! (retried), ensure the target database exists, then reconnect scoped to
//! that database and ensure the schema. Every stage returns a `Result`; the
//! binary decides what is fatal.

use backon::{ConstantBuilder, Retryable};
use sqlx::mysql::{MySqlConnection, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{is_valid_identifier, Config};
use crate::{Error, Result};

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id CHAR(36) PRIMARY KEY,
    username VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL
)";

const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id CHAR(36) PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT NOT NULL
)";

/// Initialize the database connection pool.
///
/// 1. Connect to the server as root, without a database name, retrying
///    transient failures up to `connect_attempts` times with a constant
///    interval. A failed ping consumes an attempt exactly like a failed open.
/// 2. Issue `CREATE DATABASE IF NOT EXISTS` over the root connection.
/// 3. Close the root connection and open a pool scoped to the database
///    (no retry on this step; the server is known reachable by now).
/// 4. Ping once to confirm the scoped pool is usable.
pub async fn init_database(config: &Config) -> Result<MySqlPool> {
    let db_name = &config.database.database;
    if !is_valid_identifier(db_name) {
        return Err(Error::Configuration(format!(
            "invalid database name: {db_name}"
        )));
    }

    let mut root = connect_root(config).await?;

    info!(database = %db_name, "Ensuring database exists");
    sqlx::query(&format!("CREATE DATABASE IF NOT EXISTS `{db_name}`"))
        .execute(&mut root)
        .await?;

    root.close().await?;

    info!(database = %db_name, "Connecting scoped to database");
    let pool = connect_scoped(config).await?;

    info!("Database initialized");
    Ok(pool)
}

/// Connect to the MySQL server as root and verify the connection with a
/// ping, retrying on any failure until the attempts run out.
async fn connect_root(config: &Config) -> Result<MySqlConnection> {
    let root_url = config.root_url();
    let attempts = config.database.connect_attempts.max(1);
    let backoff = ConstantBuilder::default()
        .with_delay(Duration::from_secs(
            config.database.connect_retry_interval_seconds,
        ))
        .with_max_times(attempts as usize - 1);

    info!(
        host = %config.database.host,
        port = config.database.port,
        "Connecting to MySQL server"
    );

    let conn = (|| async {
        let mut conn = MySqlConnection::connect(&root_url).await?;
        conn.ping().await?;
        Ok::<_, sqlx::Error>(conn)
    })
    .retry(backoff)
    .notify(|err: &sqlx::Error, dur: Duration| {
        warn!("Failed to connect to MySQL server, retrying in {dur:?}: {err}");
    })
    .await
    .map_err(|err| {
        warn!("Could not connect to MySQL server after {attempts} attempts: {err}");
        Error::from(err)
    })?;

    info!("Connected to MySQL server");
    Ok(conn)
}

/// Open the connection pool scoped to the configured database and ping it.
async fn connect_scoped(config: &Config) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(config.database.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.database.idle_timeout_seconds))
        .connect(&config.database_url())
        .await?;

    let mut conn = pool.acquire().await?;
    conn.ping().await?;

    Ok(pool)
}

/// Ensure the `users` and `todos` tables exist. Idempotent; safe to run on
/// every startup.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<()> {
    info!("Ensuring users table exists");
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;

    info!("Ensuring todos table exists");
    sqlx::query(CREATE_TODOS_TABLE).execute(pool).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    fn unreachable_config() -> Config {
        Config {
            database: DatabaseConfig {
                host: "127.0.0.1".to_string(),
                // Reserved port; nothing listens here
                port: 1,
                root_password: "secret".to_string(),
                database: "todoapp".to_string(),
                connect_attempts: 2,
                connect_retry_interval_seconds: 0,
                connect_timeout_seconds: 2,
                ..DatabaseConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_schema_statements_are_idempotent_ddl() {
        for stmt in [CREATE_USERS_TABLE, CREATE_TODOS_TABLE] {
            assert!(stmt.starts_with("CREATE TABLE IF NOT EXISTS"));
            assert!(stmt.contains("id CHAR(36) PRIMARY KEY"));
        }
    }

    #[test]
    fn test_schema_tables_are_distinct() {
        assert!(CREATE_USERS_TABLE.contains("users"));
        assert!(CREATE_TODOS_TABLE.contains("todos"));

        assert!(CREATE_USERS_TABLE.contains("username VARCHAR(255) NOT NULL"));
        assert!(CREATE_USERS_TABLE.contains("email VARCHAR(255) NOT NULL"));
        assert!(CREATE_USERS_TABLE.contains("password VARCHAR(255) NOT NULL"));
        assert!(CREATE_TODOS_TABLE.contains("title VARCHAR(255) NOT NULL"));
        assert!(CREATE_TODOS_TABLE.contains("description TEXT NOT NULL"));
    }

    #[tokio::test]
    async fn test_init_database_rejects_invalid_database_name() {
        let mut config = unreachable_config();
        config.database.database = "todo;DROP".to_string();

        // Rejected before any connection is attempted
        let err = init_database(&config).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[tokio::test]
    async fn test_init_database_fails_in_bounded_time_when_unreachable() {
        let config = unreachable_config();

        let start = std::time::Instant::now();
        let result = init_database(&config).await;

        assert!(result.is_err());
        // 2 attempts, zero retry interval, refused connections fail fast
        assert!(start.elapsed() < Duration::from_secs(10));
    }
}
