//! Typed path parameter extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use roster_core::types::EmployeeId;
use roster_service::EmployeeService;

use crate::error::ApiError;

/// The `{id}` segment of an employee route.
///
/// A segment that is not a well-formed identifier is rejected as
/// `NOT_FOUND`.
#[derive(Debug, Clone, Copy)]
pub struct EmployeePath(pub EmployeeId);

impl<S> FromRequestParts<S> for EmployeePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .unwrap_or_default();

        Ok(Self(EmployeeService::resolve_id(&raw)?))
    }
}
