//! Employee CRUD handlers. Each one makes a single store call.

use crate::dtos::{EmployeePayload, EmployeeResponse};
use crate::middleware::{ApiJson, EmployeeId};
use crate::models::Employee;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, Json};
use service_core::error::AppError;

pub const RECORD_DELETED: &str = "Record deleted";
pub const NO_RECORD_DELETED: &str = "No record deleted";

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let employees = state.store.list().await?;

    tracing::debug!(count = employees.len(), "Listed employees");

    Ok(Json(employees.into_iter().map(EmployeeResponse::from).collect()))
}

pub async fn create_employee(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeePayload>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let employee = state.store.insert(payload).await?;

    tracing::info!(employee_id = %employee.id, "Employee created");

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// Replace name, salary and age of an employee and echo the submitted record.
///
/// An id that matches nothing still answers 200 with the echo, the same as the
/// store's update-if-exists reports it.
pub async fn update_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
    ApiJson(payload): ApiJson<EmployeePayload>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let matched = state.store.update(id, &payload).await?;

    if matched == 0 {
        tracing::warn!(employee_id = %id, "Update matched no employee");
    } else {
        tracing::info!(employee_id = %id, "Employee updated");
    }

    let echoed = Employee::from_payload(id, payload);
    Ok(Json(EmployeeResponse::from(echoed)))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    EmployeeId(id): EmployeeId,
) -> Result<(StatusCode, &'static str), AppError> {
    let deleted = state.store.delete(id).await?;

    if deleted < 1 {
        return Err(AppError::NotFound(anyhow::anyhow!(NO_RECORD_DELETED)));
    }

    tracing::info!(employee_id = %id, "Employee deleted");

    Ok((StatusCode::OK, RECORD_DELETED))
}
