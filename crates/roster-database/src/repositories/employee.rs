//! Employee repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;
use roster_core::traits::DocumentStore;
use roster_core::types::EmployeeId;
use roster_entity::employee::{Employee, NewEmployee};

use super::map_write_error;
use crate::store::{EMPLOYEE_EMAIL_KEY, EmployeeStore};

const EMAIL_TAKEN: &str = "An employee with this email already exists";

/// PostgreSQL-backed employee store.
///
/// Each record is one row; `history` is a JSONB array rewritten together
/// with the current fields in a single `UPDATE`.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore<Employee, NewEmployee, EmployeeId> for EmployeeRepository {
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees ORDER BY joining_date DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))
    }

    async fn insert(&self, draft: &NewEmployee) -> AppResult<Employee> {
        let fields = &draft.fields;
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (id, name, email, address, experience, last_work_company, \
                                    date_of_resignation, joining_date, created_at, updated_at, history) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9, '[]'::jsonb) \
             RETURNING *",
        )
        .bind(EmployeeId::new())
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.address)
        .bind(fields.experience)
        .bind(&fields.last_work_company)
        .bind(fields.date_of_resignation)
        .bind(fields.joining_date)
        .bind(draft.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, EMPLOYEE_EMAIL_KEY, EMAIL_TAKEN, "Failed to create employee"))
    }

    async fn update_by_id(&self, doc: &Employee) -> AppResult<Option<Employee>> {
        let fields = &doc.fields;
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET name = $2, email = $3, address = $4, experience = $5, \
                                  last_work_company = $6, date_of_resignation = $7, \
                                  joining_date = $8, updated_at = $9, history = $10 \
             WHERE id = $1 RETURNING *",
        )
        .bind(doc.id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.address)
        .bind(fields.experience)
        .bind(&fields.last_work_company)
        .bind(fields.date_of_resignation)
        .bind(fields.joining_date)
        .bind(doc.updated_at)
        .bind(Json(&doc.history))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, EMPLOYEE_EMAIL_KEY, EMAIL_TAKEN, "Failed to update employee"))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count employees", e)
            })?;
        Ok(count as u64)
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE LOWER(email) = LOWER($1)")
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee by email", e)
            })
    }
}
