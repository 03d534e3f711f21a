//! Shared helpers for employee-service integration tests.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use employee_service::dtos::EmployeePayload;
use employee_service::models::Employee;
use employee_service::services::{EmployeeStore, InMemoryEmployeeStore};
use employee_service::startup::{build_router, AppState};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::{Arc, Once};
use tower::util::ServiceExt;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        service_core::observability::init_tracing("employee-service-test", "warn");
    });
}

/// Router over a fresh in-memory store.
pub fn spawn_app() -> Router {
    init_tracing();
    build_router(AppState::new(Arc::new(InMemoryEmployeeStore::new())))
}

/// Router whose store fails every call with `message`.
#[allow(dead_code)]
pub fn spawn_failing_app(message: &str) -> Router {
    init_tracing();
    build_router(AppState::new(Arc::new(FailingStore {
        message: message.to_string(),
    })))
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

struct FailingStore {
    message: String,
}

impl FailingStore {
    fn fail<T>(&self) -> Result<T, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(self.message.clone())))
    }
}

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.fail()
    }

    async fn insert(&self, _payload: EmployeePayload) -> Result<Employee, AppError> {
        self.fail()
    }

    async fn update(&self, _id: ObjectId, _payload: &EmployeePayload) -> Result<u64, AppError> {
        self.fail()
    }

    async fn delete(&self, _id: ObjectId) -> Result<u64, AppError> {
        self.fail()
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::ServiceUnavailable)
    }
}
