pub mod database;
pub mod memory;
pub mod repository;
pub mod store;

pub use database::MongoDb;
pub use memory::InMemoryEmployeeStore;
pub use repository::MongoEmployeeStore;
pub use store::EmployeeStore;
