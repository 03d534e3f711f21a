use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

pub const INVALID_EMPLOYEE_ID: &str = "Invalid employee ID";

/// `{id}` path segment parsed as a MongoDB ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeId(pub ObjectId);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(anyhow::anyhow!(INVALID_EMPLOYEE_ID)))?;

        let id = ObjectId::parse_str(&raw).map_err(|e| {
            tracing::debug!(employee_id = %raw, error = %e, "Rejected employee id");
            AppError::BadRequest(anyhow::anyhow!(INVALID_EMPLOYEE_ID))
        })?;

        Ok(EmployeeId(id))
    }
}
