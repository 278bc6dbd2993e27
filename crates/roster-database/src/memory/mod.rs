//! In-memory store implementations for single-process deployments and
//! tests. Contents are lost when the process exits.

pub mod employee;
pub mod user;

pub use employee::MemoryEmployeeStore;
pub use user::MemoryUserStore;
