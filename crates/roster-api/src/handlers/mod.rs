//! Request handlers grouped by resource.

pub mod auth;
pub mod employee;
pub mod health;
