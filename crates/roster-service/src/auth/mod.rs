//! Account registration, login, and profile lookup.

pub mod service;

pub use service::{AuthService, Credentials};
