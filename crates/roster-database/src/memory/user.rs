//! In-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::types::UserId;
use roster_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// In-memory user store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.has_email(email))
            .cloned())
    }

    async fn insert(&self, data: &CreateUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.has_email(&data.email)) {
            return Err(AppError::conflict("Email already in use"));
        }

        let mut data = data.clone();
        data.email = data.email.trim().to_string();
        let user = data.into_user(UserId::new(), Utc::now());
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}
