//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use roster_core::config::DatabaseConfig;
use roster_core::config::database::mask_password;
use roster_core::error::{AppError, ErrorKind};

/// Table whose presence marks the schema as migrated.
const SCHEMA_MARKER: &str = "public.employees";

/// Reject URLs that cannot name a PostgreSQL server before dialing.
fn check_url(url: &str) -> Result<(), AppError> {
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        return Ok(());
    }
    Err(AppError::configuration(format!(
        "database.url must be a postgres:// URL, got '{}'",
        mask_password(url)
    )))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// Pooled connections shared by the employee and user repositories.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect using `config`. The URL is logged with its password masked.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        check_url(&config.url)?;

        info!(
            url = %mask_password(&config.url),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!(
                        "Failed to connect to {}: {e}",
                        mask_password(&config.url)
                    ),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// `true` when the server answers and the employee schema is migrated.
    ///
    /// A reachable database without the `employees` table reports `false`
    /// so that a server started with migrations disabled shows as degraded.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        let migrated: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
            .bind(SCHEMA_MARKER)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))?;

        if !migrated {
            warn!("Database reachable but employees table is missing; run migrations");
        }
        Ok(migrated)
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
