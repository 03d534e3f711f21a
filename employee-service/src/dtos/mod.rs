pub mod employees;

pub use employees::{EmployeePayload, EmployeeResponse};
