//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use roster_core::types::{EmployeeId, UserId};

/// The seven mutable fields of an employee record.
///
/// This is both the validated form of client input and the payload of a
/// [`HistoryEntry`] snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    /// Full name (1..=50 characters).
    pub name: String,
    /// Contact email, unique across live employees.
    pub email: String,
    /// Postal address (1..=100 characters).
    pub address: String,
    /// Years of prior experience, `0.0..=50.0`.
    pub experience: f64,
    /// Previous employer (1..=50 characters).
    pub last_work_company: String,
    /// Resignation date at the previous employer.
    pub date_of_resignation: NaiveDate,
    /// Date the employee joined.
    pub joining_date: NaiveDate,
}

/// Snapshot of an employee's mutable fields as they stood immediately
/// before an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// When the superseding update happened.
    pub changed_at: DateTime<Utc>,
    /// Who performed the update, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_by: Option<UserId>,
    /// The pre-image.
    pub data: EmployeeFields,
}

/// A stored employee record together with its change history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: EmployeeId,
    /// Current field values.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub fields: EmployeeFields,
    /// Set once when the record is created.
    pub created_at: DateTime<Utc>,
    /// Set on creation and on every successful update.
    pub updated_at: DateTime<Utc>,
    /// Pre-images of every update, oldest first.
    #[sqlx(json)]
    pub history: Vec<HistoryEntry>,
}

impl Employee {
    /// Returns `true` if `email` names the same mailbox as this record's
    /// current email (case-insensitive).
    pub fn has_email(&self, email: &str) -> bool {
        self.fields.email.eq_ignore_ascii_case(email.trim())
    }

    /// Listing view of this record without its history.
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            id: self.id,
            fields: self.fields.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            history_count: self.history.len(),
        }
    }
}

/// Employee record as returned by listings: history is replaced by its
/// length to keep list responses bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    /// Record identifier.
    pub id: EmployeeId,
    /// Current field values.
    #[serde(flatten)]
    pub fields: EmployeeFields,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of archived revisions.
    pub history_count: usize,
}

/// Data required to insert a new employee. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Validated initial field values.
    pub fields: EmployeeFields,
    /// Creation time; also used as the initial `updated_at`.
    pub created_at: DateTime<Utc>,
}

impl NewEmployee {
    /// Materialize the record the store will persist under `id`.
    ///
    /// New records start with an empty history: creation is not itself a
    /// revision.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            fields: self.fields,
            created_at: self.created_at,
            updated_at: self.created_at,
            history: Vec::new(),
        }
    }
}
