//! In-memory employee store guarded by a Tokio read-write lock.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster_core::error::AppError;
use roster_core::result::AppResult;
use roster_core::traits::DocumentStore;
use roster_core::types::EmployeeId;
use roster_entity::employee::{Employee, NewEmployee};

use crate::store::EmployeeStore;

/// In-memory employee store.
///
/// Every write holds the write lock for its whole duration, so a reader
/// never sees a record with its fields and history out of step.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    records: Arc<RwLock<HashMap<EmployeeId, Employee>>>,
}

impl MemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(
    records: &HashMap<EmployeeId, Employee>,
    email: &str,
    except: Option<EmployeeId>,
) -> bool {
    records
        .values()
        .any(|e| Some(e.id) != except && e.has_email(email))
}

fn email_conflict() -> AppError {
    AppError::conflict("An employee with this email already exists")
}

#[async_trait]
impl DocumentStore<Employee, NewEmployee, EmployeeId> for MemoryEmployeeStore {
    async fn find_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let mut all: Vec<Employee> = self.records.read().await.values().cloned().collect();
        all.sort_by_key(|e| (Reverse(e.fields.joining_date), Reverse(e.created_at)));
        Ok(all)
    }

    async fn insert(&self, draft: &NewEmployee) -> AppResult<Employee> {
        let mut records = self.records.write().await;
        if email_taken(&records, &draft.fields.email, None) {
            return Err(email_conflict());
        }

        let employee = draft.clone().into_employee(EmployeeId::new());
        records.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update_by_id(&self, doc: &Employee) -> AppResult<Option<Employee>> {
        let mut records = self.records.write().await;
        if !records.contains_key(&doc.id) {
            return Ok(None);
        }
        if email_taken(&records, &doc.fields.email, Some(doc.id)) {
            return Err(email_conflict());
        }

        records.insert(doc.id, doc.clone());
        Ok(Some(doc.clone()))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> AppResult<bool> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|e| e.has_email(email))
            .cloned())
    }
}
