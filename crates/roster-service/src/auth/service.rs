//! Registration, login, and profile lookup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::ValidateEmail;

use roster_auth::jwt::{IssuedToken, JwtEncoder};
use roster_auth::password::{PasswordHasher, PasswordValidator};
use roster_core::error::AppError;
use roster_core::types::FieldViolation;
use roster_database::store::UserStore;
use roster_entity::user::{CreateUser, User};

use crate::context::RequestContext;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Email and password as submitted to register or log in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from borrowed parts.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email trimmed and lowercased, the form users are stored under.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }

    fn email_violation(&self) -> Option<FieldViolation> {
        let email = self.normalized_email();
        if email.is_empty() {
            return Some(FieldViolation::new("email", "required", "is required"));
        }
        if !email.validate_email() {
            return Some(FieldViolation::new(
                "email",
                "email",
                "must be a valid email address",
            ));
        }
        None
    }
}

/// Handles account registration and token issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Access token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
        }
    }

    /// Create an account and return the stored user.
    ///
    /// Every invalid field is reported at once. A taken email (compared
    /// case-insensitively) is a conflict.
    pub async fn create_user(&self, credentials: &Credentials) -> Result<User, AppError> {
        let violations: Vec<FieldViolation> = credentials
            .email_violation()
            .into_iter()
            .chain(self.validator.check(&credentials.password))
            .collect();
        if !violations.is_empty() {
            return Err(AppError::invalid_fields(violations));
        }

        let email = credentials.normalized_email();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.hasher.hash_password(&credentials.password)?;
        let user = self
            .users
            .insert(&CreateUser {
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }

    /// Register a new account and return an access token for it.
    pub async fn register(&self, credentials: &Credentials) -> Result<IssuedToken, AppError> {
        let user = self.create_user(credentials).await?;
        self.encoder.issue(user.id, &user.email)
    }

    /// Exchange valid credentials for an access token.
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn login(&self, credentials: &Credentials) -> Result<IssuedToken, AppError> {
        let mut violations: Vec<FieldViolation> =
            credentials.email_violation().into_iter().collect();
        if credentials.password.is_empty() {
            violations.push(FieldViolation::new("password", "required", "is required"));
        }
        if !violations.is_empty() {
            return Err(AppError::invalid_fields(violations));
        }

        let email = credentials.normalized_email();
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!(email = %email, "Login failed: unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self
            .hasher
            .verify_password(&credentials.password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, "User logged in");
        self.encoder.issue(user.id, &user.email)
    }

    /// The profile of the calling user.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use roster_auth::jwt::JwtDecoder;
    use roster_core::config::AuthConfig;
    use roster_core::error::ErrorKind;
    use roster_database::memory::MemoryUserStore;

    use super::*;

    fn service() -> (AuthService, JwtDecoder) {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        };
        let service = AuthService::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
            Arc::new(JwtEncoder::new(&config)),
        );
        (service, JwtDecoder::new(&config))
    }

    #[tokio::test]
    async fn test_register_issues_token_for_new_user() {
        let (service, decoder) = service();
        let issued = service
            .register(&Credentials::new("Admin@X.com", "secret1"))
            .await
            .unwrap();

        let claims = decoder.decode_access_token(&issued.token).unwrap();
        assert_eq!(claims.email, "admin@x.com");

        let ctx = RequestContext::new(claims.sub, claims.email, "127.0.0.1", None);
        let me = service.me(&ctx).await.unwrap();
        assert_eq!(me.email, "admin@x.com");
        assert_ne!(me.password_hash, "secret1");
    }

    #[tokio::test]
    async fn test_register_reports_every_invalid_field() {
        let (service, _) = service();
        let err = service
            .register(&Credentials::new("nope", "123"))
            .await
            .unwrap_err();

        assert!(err.is(ErrorKind::Validation));
        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict() {
        let (service, _) = service();
        service
            .register(&Credentials::new("admin@x.com", "secret1"))
            .await
            .unwrap();

        let err = service
            .register(&Credentials::new("ADMIN@x.com", "secret2"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }

    #[tokio::test]
    async fn test_login_accepts_correct_password_only() {
        let (service, _) = service();
        service
            .register(&Credentials::new("admin@x.com", "secret1"))
            .await
            .unwrap();

        assert!(
            service
                .login(&Credentials::new(" admin@x.com", "secret1"))
                .await
                .is_ok()
        );

        let wrong = service
            .login(&Credentials::new("admin@x.com", "secret2"))
            .await
            .unwrap_err();
        let unknown = service
            .login(&Credentials::new("ghost@x.com", "secret1"))
            .await
            .unwrap_err();
        assert!(wrong.is(ErrorKind::Authentication));
        assert!(unknown.is(ErrorKind::Authentication));
        assert_eq!(wrong.message, unknown.message);
    }

    #[tokio::test]
    async fn test_login_requires_password() {
        let (service, _) = service();
        let err = service
            .login(&Credentials::new("admin@x.com", ""))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Validation));
        assert_eq!(err.violations[0].field, "password");
    }

    #[tokio::test]
    async fn test_me_for_unknown_user_is_not_found() {
        let (service, _) = service();
        let ctx = RequestContext::new(
            roster_core::types::UserId::new(),
            "ghost@x.com",
            "127.0.0.1",
            None,
        );
        let err = service.me(&ctx).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
