//! Employee domain entities.

pub mod draft;
pub mod model;
pub mod revision;

pub use draft::EmployeeDraft;
pub use model::{Employee, EmployeeFields, EmployeeSummary, HistoryEntry, NewEmployee};
