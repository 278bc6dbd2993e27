//! The append-then-apply revision rule for employee records.

use chrono::{DateTime, Utc};

use roster_core::types::UserId;

use super::model::{Employee, HistoryEntry};
use super::EmployeeFields;

impl Employee {
    /// Capture the current field values as a history entry without
    /// modifying the record.
    pub fn snapshot(&self, changed_at: DateTime<Utc>, changed_by: Option<UserId>) -> HistoryEntry {
        HistoryEntry {
            changed_at,
            changed_by,
            data: self.fields.clone(),
        }
    }

    /// Apply a revision: archive the current values, then overwrite them.
    ///
    /// The archived entry always holds the pre-image. `updated_at` becomes
    /// `at`. The record is changed in memory only; callers persist it with
    /// a single store write.
    pub fn revise(&mut self, fields: EmployeeFields, actor: Option<UserId>, at: DateTime<Utc>) {
        let entry = self.snapshot(at, actor);
        self.history.push(entry);
        self.fields = fields;
        self.updated_at = at;
    }

    /// The most recent archived revision, if any.
    pub fn last_revision(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }
}
