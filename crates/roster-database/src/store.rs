//! Entity-specific store traits.
//!
//! Services depend on these traits rather than on a concrete backend, so
//! the PostgreSQL repositories and the in-memory stores are
//! interchangeable at startup.

use async_trait::async_trait;

use roster_core::result::AppResult;
use roster_core::traits::DocumentStore;
use roster_core::types::{EmployeeId, UserId};
use roster_entity::employee::{Employee, NewEmployee};
use roster_entity::user::{CreateUser, User};

/// Constraint/index name guarding case-insensitive employee email uniqueness.
pub const EMPLOYEE_EMAIL_KEY: &str = "employees_email_lower_key";

/// Constraint/index name guarding case-insensitive user email uniqueness.
pub const USER_EMAIL_KEY: &str = "users_email_lower_key";

/// Persistence for employee records.
///
/// Listing order is `joining_date` descending, ties broken by
/// `created_at` descending. Inserts and updates reject an email already
/// held by another record (case-insensitive) with a conflict error.
#[async_trait]
pub trait EmployeeStore: DocumentStore<Employee, NewEmployee, EmployeeId> + std::fmt::Debug {
    /// Find the employee whose email matches `email` case-insensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;
}

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: std::fmt::Debug + Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a user; a duplicate email is a conflict.
    async fn insert(&self, data: &CreateUser) -> AppResult<User>;

    /// Count registered users.
    async fn count(&self) -> AppResult<u64>;
}
