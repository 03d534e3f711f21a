use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::dtos::EmployeePayload;

/// An employee document as stored in the `employees` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: i64,
}

impl Employee {
    pub fn from_payload(id: ObjectId, payload: EmployeePayload) -> Self {
        Self {
            id,
            name: payload.name,
            salary: payload.salary,
            age: payload.age,
        }
    }

    /// Overwrite the mutable fields, keeping the id.
    pub fn apply(&mut self, payload: &EmployeePayload) {
        self.name = payload.name.clone();
        self.salary = payload.salary;
        self.age = payload.age;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn stored_document_uses_underscore_id() {
        let employee = Employee {
            id: ObjectId::new(),
            name: "Ann".to_string(),
            salary: 50000.0,
            age: 30,
        };

        let document = bson::to_document(&employee).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), employee.id);
        assert!(!document.contains_key("id"));
        assert_eq!(document.get_str("name").unwrap(), "Ann");
    }

    #[test]
    fn reads_documents_with_int32_age_and_integer_salary() {
        let id = ObjectId::new();
        let document = doc! { "_id": id, "name": "Bo", "salary": 40000_i64, "age": 25_i32 };

        let employee: Employee = bson::from_document(document).unwrap();
        assert_eq!(employee.id, id);
        assert_eq!(employee.salary, 40000.0);
        assert_eq!(employee.age, 25);
    }

    #[test]
    fn apply_replaces_every_field_but_id() {
        let id = ObjectId::new();
        let mut employee = Employee {
            id,
            name: "Ann".to_string(),
            salary: 50000.0,
            age: 30,
        };

        employee.apply(&EmployeePayload {
            name: "Ann B".to_string(),
            salary: 55000.0,
            age: 31,
        });

        assert_eq!(employee.id, id);
        assert_eq!(employee.name, "Ann B");
        assert_eq!(employee.salary, 55000.0);
        assert_eq!(employee.age, 31);
    }
}
