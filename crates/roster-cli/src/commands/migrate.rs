//! Database migration management commands.

use clap::Args;
use tabled::Tabled;

use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_database::DatabasePool;
use roster_database::migration::{migration_status, run_migrations};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Only report which migrations are applied
    #[arg(long)]
    pub status: bool,
}

#[derive(Debug, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
    applied: String,
}

/// Execute the migrate command
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    let pool = super::connect_pool(config).await?;

    let result = if args.status {
        print_status(&pool).await
    } else {
        println!("Running database migrations...");
        run_migrations(pool.pool()).await.map(|()| {
            output::print_success("All migrations applied successfully.");
        })
    };

    pool.close().await;
    result
}

async fn print_status(pool: &DatabasePool) -> Result<(), AppError> {
    let status = migration_status(pool.pool()).await?;
    let rows: Vec<MigrationRow> = status
        .into_iter()
        .map(|m| MigrationRow {
            version: m.version,
            description: m.description,
            applied: if m.applied { "yes" } else { "pending" }.to_string(),
        })
        .collect();
    println!("{}", tabled::Table::new(rows));
    Ok(())
}
