use crate::dtos::EmployeePayload;
use crate::models::Employee;
use crate::services::EmployeeStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local store with the same observable behavior as the MongoDB one.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Employee>>, AppError> {
        self.employees
            .read()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Employee store poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Employee>>, AppError> {
        self.employees
            .write()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Employee store poisoned: {}", e)))
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn insert(&self, payload: EmployeePayload) -> Result<Employee, AppError> {
        let employee = Employee::from_payload(ObjectId::new(), payload);
        self.write()?.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: ObjectId, payload: &EmployeePayload) -> Result<u64, AppError> {
        let mut employees = self.write()?;
        match employees.iter_mut().find(|e| e.id == id) {
            Some(employee) => {
                employee.apply(payload);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        let mut employees = self.write()?;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        Ok((before - employees.len()) as u64)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
