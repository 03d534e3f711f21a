use crate::dtos::EmployeePayload;
use crate::models::Employee;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Storage operations behind the employee handlers.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every stored employee, unfiltered and unsorted.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Persist a new employee and return it with the id the store assigned.
    async fn insert(&self, payload: EmployeePayload) -> Result<Employee, AppError>;

    /// Overwrite name, salary and age of the employee with `id`.
    ///
    /// Returns the number of matched records. Zero is not an error.
    async fn update(&self, id: ObjectId, payload: &EmployeePayload) -> Result<u64, AppError>;

    /// Remove the employee with `id`, returning how many records were deleted.
    async fn delete(&self, id: ObjectId) -> Result<u64, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
