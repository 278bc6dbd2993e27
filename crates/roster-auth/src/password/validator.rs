//! Password policy for new accounts.

use roster_core::config::AuthConfig;
use roster_core::error::AppError;
use roster_core::types::FieldViolation;

/// Enforces the configured minimum password length.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Returns the violation for `password`, if any.
    pub fn check(&self, password: &str) -> Option<FieldViolation> {
        if password.chars().count() < self.min_length {
            return Some(FieldViolation::new(
                "password",
                "length",
                format!("must be at least {} characters", self.min_length),
            ));
        }
        None
    }

    /// Validate `password`, failing with a validation error naming the
    /// `password` field.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        match self.check(password) {
            Some(violation) => Err(AppError::invalid_fields(vec![violation])),
            None => Ok(()),
        }
    }
}
