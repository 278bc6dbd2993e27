//! Employee CRUD with append-only change history.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use roster_core::error::AppError;
use roster_core::traits::DocumentStore;
use roster_core::types::EmployeeId;
use roster_database::store::EmployeeStore;
use roster_entity::employee::{
    Employee, EmployeeDraft, EmployeeFields, EmployeeSummary, HistoryEntry, NewEmployee,
};

use crate::context::RequestContext;

/// Manages employee records and their revision history.
///
/// Every update archives the record's current values into `history`
/// before overwriting them, then persists the whole record in one store
/// write.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// Employee store.
    store: Arc<dyn EmployeeStore>,
}

fn not_found() -> AppError {
    AppError::not_found("Employee not found")
}

fn validate(draft: EmployeeDraft) -> Result<EmployeeFields, AppError> {
    draft.into_fields().map_err(AppError::invalid_fields)
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Parse a client-supplied identifier.
    ///
    /// A malformed identifier cannot name any record, so it is reported
    /// as not found rather than as invalid input.
    pub fn resolve_id(raw: &str) -> Result<EmployeeId, AppError> {
        EmployeeId::parse(raw).ok_or_else(not_found)
    }

    /// Create a record with an empty history.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        draft: EmployeeDraft,
    ) -> Result<Employee, AppError> {
        let fields = validate(draft)?;

        if self.store.find_by_email(&fields.email).await?.is_some() {
            return Err(AppError::conflict("Employee already exists"));
        }

        let employee = self
            .store
            .insert(&NewEmployee {
                fields,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            employee_id = %employee.id,
            actor_id = %ctx.user_id,
            "Employee created"
        );
        Ok(employee)
    }

    /// Fetch one record including its full history.
    pub async fn get(&self, id: EmployeeId) -> Result<Employee, AppError> {
        self.store.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// All records, most recently joined first, without their histories.
    pub async fn list(&self) -> Result<Vec<EmployeeSummary>, AppError> {
        let employees = self.store.find_all().await?;
        Ok(employees.iter().map(Employee::summary).collect())
    }

    /// Replace a record's fields, archiving the previous values.
    ///
    /// Validation runs before the record is loaded. Keeping the current
    /// email is never a conflict; taking another record's email is.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Employee, AppError> {
        let fields = validate(draft)?;
        let mut employee = self.get(id).await?;

        if !employee.has_email(&fields.email) {
            let holder = self
                .store
                .find_by_email(&fields.email)
                .await?
                .filter(|holder| holder.id != id);
            if let Some(holder) = holder {
                warn!(
                    employee_id = %id,
                    holder_id = %holder.id,
                    "Update rejected: email held by another employee"
                );
                return Err(AppError::conflict("Email already in use by another employee"));
            }
        }

        employee.revise(fields, Some(ctx.user_id), Utc::now());

        let saved = self.store.update_by_id(&employee).await?.ok_or_else(not_found)?;

        info!(
            employee_id = %saved.id,
            actor_id = %ctx.user_id,
            history_len = saved.history.len(),
            "Employee updated"
        );
        Ok(saved)
    }

    /// Permanently remove a record and its history.
    pub async fn delete(&self, ctx: &RequestContext, id: EmployeeId) -> Result<(), AppError> {
        if !self.store.delete_by_id(id).await? {
            return Err(not_found());
        }

        info!(employee_id = %id, actor_id = %ctx.user_id, "Employee removed");
        Ok(())
    }

    /// The archived revisions of one record, oldest first.
    pub async fn history(&self, id: EmployeeId) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(self.get(id).await?.history)
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }
}
