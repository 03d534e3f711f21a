use crate::models::Employee;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for create and update.
///
/// Keys match case-insensitively, absent or `null` fields fall back to their zero
/// value and any `id` in the body is ignored. A field with the wrong JSON type is
/// still a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub name: String,
    pub salary: f64,
    pub age: i64,
}

impl<'de> Deserialize<'de> for EmployeePayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            name: lenient_field(&fields, "name")?,
            salary: lenient_field(&fields, "salary")?,
            age: lenient_field(&fields, "age")?,
        })
    }
}

/// Exact key first, then the first case-insensitive match.
fn lenient_field<T, E>(fields: &Map<String, Value>, key: &str) -> Result<T, E>
where
    T: DeserializeOwned + Default,
    E: de::Error,
{
    let value = fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    });

    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::deserialize(value).map_err(|e| E::custom(format!("{}: {}", key, e))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: i64,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_hex(),
            name: employee.name,
            salary: employee.salary,
            age: employee.age,
        }
    }
}
