use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::AppState;
use crate::database::models::{CreateEmployeeInput, UpdateEmployeeInput};
use crate::database::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn list_employees(
    repo: web::Data<EmployeeRepository>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Admin-add shares the registration path with signup, so the duplicate
/// email check and hashing behave identically.
pub async fn create_employee(
    state: web::Data<AppState>,
    input: web::Json<CreateEmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = state
        .auth_service
        .register_employee(input.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<i32>,
    input: web::Json<UpdateEmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = input.into_inner();

    let employee = repo
        .update(id, &input.name, &input.email, &input.phone)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let deleted = repo.delete_cascade(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::message(
        "Employee and related payroll records deleted successfully",
    )))
}

pub async fn count_employees(
    repo: web::Data<EmployeeRepository>,
) -> Result<HttpResponse, AppError> {
    let count = repo.count().await?;
    Ok(HttpResponse::Ok().json(json!({ "count": count })))
}
