//! Core type definitions used across the Roster workspace.

pub mod id;
pub mod violation;

pub use id::*;
pub use violation::FieldViolation;
