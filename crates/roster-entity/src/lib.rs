//! # roster-entity
//!
//! Domain entity models for Roster. Every struct in this crate represents
//! a stored document or a domain value object. Stored entities derive
//! `sqlx::FromRow` in addition to `Serialize`/`Deserialize`; the JSON wire
//! format uses camelCase field names.

pub mod employee;
pub mod user;
