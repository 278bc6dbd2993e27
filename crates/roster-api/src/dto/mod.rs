//! Data transfer objects for API responses.

pub mod response;

pub use response::{ApiResponse, HealthResponse, MessageResponse};
