//! Store set that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use roster_core::config::{DatabaseConfig, StoreProvider};
use roster_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryEmployeeStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{EmployeeRepository, UserRepository};
use crate::store::{EmployeeStore, UserStore};

/// The employee and user stores for one running process.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Employee records.
    pub employees: Arc<dyn EmployeeStore>,
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Connection pool backing both stores, when PostgreSQL is in use.
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Open the stores described by `config`.
    ///
    /// For PostgreSQL this connects the pool and, when enabled, runs
    /// pending migrations before returning.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Memory => {
                info!("Initializing in-memory stores");
                Ok(Self::memory())
            }
            StoreProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            employees: Arc::new(MemoryEmployeeStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            pool: None,
        }
    }

    /// PostgreSQL-backed stores sharing `pool`.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            employees: Arc::new(EmployeeRepository::new(pool.pool().clone())),
            users: Arc::new(UserRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Which provider backs these stores.
    pub fn provider(&self) -> StoreProvider {
        match self.pool {
            Some(_) => StoreProvider::Postgres,
            None => StoreProvider::Memory,
        }
    }

    /// The connection pool, when PostgreSQL is in use.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
