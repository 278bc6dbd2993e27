//! # roster-core
//!
//! Core crate for Roster. Contains the document-store trait, configuration
//! schemas, typed identifiers, field-violation reporting, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Roster crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
