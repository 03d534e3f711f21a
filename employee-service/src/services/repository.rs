use crate::dtos::EmployeePayload;
use crate::models::Employee;
use crate::services::{EmployeeStore, MongoDb};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoEmployeeStore {
    db: MongoDb,
}

impl MongoEmployeeStore {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let cursor = self.db.employees().find(doc! {}, None).await?;
        let employees: Vec<Employee> = cursor.try_collect().await?;
        Ok(employees)
    }

    async fn insert(&self, payload: EmployeePayload) -> Result<Employee, AppError> {
        // Inserted without `_id` so the driver assigns one.
        let result = self
            .db
            .employees()
            .clone_with_type::<EmployeePayload>()
            .insert_one(&payload, None)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        Ok(Employee::from_payload(id, payload))
    }

    async fn update(&self, id: ObjectId, payload: &EmployeePayload) -> Result<u64, AppError> {
        let filter = doc! { "_id": id };
        let update = doc! {
            "$set": {
                "name": payload.name.as_str(),
                "age": payload.age,
                "salary": payload.salary,
            }
        };

        let result = self.db.employees().update_one(filter, update, None).await?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self
            .db
            .employees()
            .delete_one(doc! { "_id": id }, None)
            .await?;
        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}
