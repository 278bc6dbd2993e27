//! Employee handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use roster_entity::employee::{Employee, EmployeeDraft, EmployeeSummary, HistoryEntry};

use crate::dto::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, EmployeePath, ValidatedJson};
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<EmployeeSummary>>>, ApiError> {
    let employees = state.employee_service.list().await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(draft): ValidatedJson<EmployeeDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    let employee = state.employee_service.create(&auth, draft).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(employee))))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    EmployeePath(id): EmployeePath,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state.employee_service.get(id).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// PUT /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    EmployeePath(id): EmployeePath,
    ValidatedJson(draft): ValidatedJson<EmployeeDraft>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state.employee_service.update(&auth, id, draft).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    EmployeePath(id): EmployeePath,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.employee_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Employee removed"))))
}

/// GET /api/employees/{id}/history
pub async fn employee_history(
    State(state): State<AppState>,
    _auth: AuthUser,
    EmployeePath(id): EmployeePath,
) -> Result<Json<ApiResponse<Vec<HistoryEntry>>>, ApiError> {
    let history = state.employee_service.history(id).await?;
    Ok(Json(ApiResponse::ok(history)))
}
