//! CLI command definitions and dispatch.

pub mod config;
pub mod employee;
pub mod migrate;
pub mod user;

use clap::{Parser, Subcommand};

use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_database::{DatabasePool, Stores};

use crate::output::{self, OutputFormat};

/// Roster: employee records with change history
#[derive(Debug, Parser)]
#[command(name = "roster", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and environment overlays
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to apply (`config/{env}.toml`)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User account management
    User(user::UserArgs),
    /// Employee record inspection
    Employee(employee::EmployeeArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let app_config = self.load_config()?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &app_config).await,
            Commands::User(args) => user::execute(args, &app_config, self.format).await,
            Commands::Employee(args) => employee::execute(args, &app_config, self.format).await,
            Commands::Config(args) => config::execute(args, &app_config, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config_dir, &self.env)
    }
}

/// Helper: connect to PostgreSQL regardless of the configured provider.
pub async fn connect_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: open the configured stores, warning when they will not persist.
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    let stores = Stores::open(&config.database).await?;
    if stores.pool().is_none() {
        output::print_warning("Using the in-memory store; changes will not persist.");
    }
    Ok(stores)
}
