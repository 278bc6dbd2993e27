//! The versioned employee record store.

pub mod service;

pub use service::EmployeeService;
