//! # roster-service
//!
//! Business logic service layer for Roster. Each service orchestrates the
//! store traits and the credential primitives to implement one group of
//! application use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references, with stores held as trait
//! objects so the backend is chosen at startup.

pub mod auth;
pub mod context;
pub mod employee;

pub use auth::{AuthService, Credentials};
pub use context::RequestContext;
pub use employee::EmployeeService;
