use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Public shape of an employee record; the password hash never leaves the
/// repository layer through this type.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EmployeeInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Employee> for EmployeeInfo {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            phone: employee.phone,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}
