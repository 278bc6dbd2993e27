//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use roster_auth::jwt::{JwtDecoder, JwtEncoder};
use roster_auth::password::{PasswordHasher, PasswordValidator};
use roster_core::config::AppConfig;
use roster_database::Stores;
use roster_service::{AuthService, EmployeeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Backing stores (kept for health checks).
    pub stores: Stores,
    /// Access token validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login.
    pub auth_service: Arc<AuthService>,
    /// Employee records.
    pub employee_service: Arc<EmployeeService>,
    /// When the state was built, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Wire services over `stores` using `config`.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            hasher,
            validator,
            encoder,
        ));
        let employee_service = Arc::new(EmployeeService::new(Arc::clone(&stores.employees)));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            auth_service,
            employee_service,
            started_at: Instant::now(),
        }
    }
}
