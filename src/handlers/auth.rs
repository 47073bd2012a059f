use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::database::models::{AdminInfo, CreateEmployeeInput, EmployeeInfo};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AdminLoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeLoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub message: String,
    pub token: String,
    pub role: &'static str,
    pub user: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct EmployeeLoginResponse {
    pub message: String,
    pub token: String,
    pub role: &'static str,
    pub employee: EmployeeInfo,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub employee: EmployeeInfo,
}

pub async fn admin_login(
    state: web::Data<AppState>,
    input: web::Json<AdminLoginInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    let (token, admin) = state
        .auth_service
        .admin_login(&input.username, &input.password)
        .await?;

    Ok(HttpResponse::Ok().json(AdminLoginResponse {
        message: "Login successful".to_string(),
        token,
        role: "admin",
        user: admin.into(),
    }))
}

pub async fn employee_login(
    state: web::Data<AppState>,
    input: web::Json<EmployeeLoginInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    let (token, employee) = state
        .auth_service
        .employee_login(&input.email, &input.password)
        .await?;

    Ok(HttpResponse::Ok().json(EmployeeLoginResponse {
        message: "Login successful".to_string(),
        token,
        role: "employee",
        employee: employee.into(),
    }))
}

pub async fn signup(
    state: web::Data<AppState>,
    input: web::Json<CreateEmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = state
        .auth_service
        .register_employee(input.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "Employee registered successfully".to_string(),
        employee,
    }))
}
