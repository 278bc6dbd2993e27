//! PostgreSQL implementations of the store traits.

pub mod employee;
pub mod user;

pub use employee::EmployeeRepository;
pub use user::UserRepository;

/// Map a unique-index violation on `key` to a conflict error, everything
/// else to a database error carrying `context`.
pub(crate) fn map_write_error(
    err: sqlx::Error,
    key: &str,
    conflict_message: &str,
    context: &str,
) -> roster_core::error::AppError {
    use roster_core::error::{AppError, ErrorKind};

    match err {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(key) => {
            AppError::conflict(conflict_message.to_string())
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}
