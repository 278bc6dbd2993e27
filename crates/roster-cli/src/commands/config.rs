//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use roster_core::config::AppConfig;
use roster_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = config.redacted();
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => print_config(&config),
            }
        }
    }

    Ok(())
}

fn print_config(config: &AppConfig) {
    output::print_heading("[server]");
    output::print_kv("bind", &config.server.bind_address());
    output::print_kv(
        "request_timeout_seconds",
        &config.server.request_timeout_seconds.to_string(),
    );
    output::print_kv(
        "cors.allowed_origins",
        &config.server.cors.allowed_origins.join(", "),
    );

    output::print_heading("[database]");
    output::print_kv("provider", &config.database.provider.to_string());
    output::print_kv("url", &config.database.url);
    output::print_kv(
        "max_connections",
        &config.database.max_connections.to_string(),
    );
    output::print_kv("run_migrations", &config.database.run_migrations.to_string());

    output::print_heading("[auth]");
    output::print_kv("jwt_secret", &config.auth.jwt_secret);
    output::print_kv(
        "jwt_access_ttl_minutes",
        &config.auth.jwt_access_ttl_minutes.to_string(),
    );
    output::print_kv(
        "password_min_length",
        &config.auth.password_min_length.to_string(),
    );

    output::print_heading("[logging]");
    output::print_kv("level", &config.logging.level);
    output::print_kv("format", &config.logging.format);
}
