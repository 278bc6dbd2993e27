//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use roster_auth::jwt::JwtEncoder;
use roster_auth::password::{PasswordHasher, PasswordValidator};
use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_service::{AuthService, Credentials};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create a user account
    Create {
        /// Login email
        #[arg(long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        UserCommand::Create { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password()?,
            };

            let stores = super::open_stores(config).await?;
            let service = AuthService::new(
                Arc::clone(&stores.users),
                Arc::new(PasswordHasher::new()),
                Arc::new(PasswordValidator::new(&config.auth)),
                Arc::new(JwtEncoder::new(&config.auth)),
            );

            let result = service
                .create_user(&Credentials::new(email.as_str(), password))
                .await;
            stores.close().await;
            let user = result?;

            match format {
                OutputFormat::Json => output::print_json(&user),
                OutputFormat::Table => {
                    output::print_success(&format!("User '{}' created", user.email));
                    output::print_kv("ID", &user.id.to_string());
                }
            }
        }
    }

    Ok(())
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}
