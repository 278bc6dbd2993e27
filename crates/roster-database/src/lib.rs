//! # roster-database
//!
//! Document store abstractions for Roster entities together with their
//! PostgreSQL and in-memory implementations, connection management and
//! the migration runner.

pub mod backend;
pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use backend::Stores;
pub use connection::DatabasePool;
pub use memory::{MemoryEmployeeStore, MemoryUserStore};
pub use repositories::{EmployeeRepository, UserRepository};
pub use store::{EmployeeStore, UserStore};
