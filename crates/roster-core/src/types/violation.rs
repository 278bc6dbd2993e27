//! Field-level constraint violations reported by input validation.

use serde::{Deserialize, Serialize};

/// A single violated constraint on a named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `lastWorkCompany`).
    pub field: String,
    /// Machine-readable constraint code (`required`, `length`, `email`, ...).
    pub code: String,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldViolation {
    /// Create a new violation.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}
