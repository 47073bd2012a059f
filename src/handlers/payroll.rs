use actix_web::{HttpResponse, web};
use bigdecimal::BigDecimal;

use crate::database::repositories::{EmployeeRepository, PayrollRepository};
use crate::error::AppError;
use crate::services::payroll;

/// Process payroll for an employee. Tax and net salary are derived here and
/// stored; they are never recomputed afterwards.
pub async fn create_payroll(
    repo: web::Data<PayrollRepository>,
    employees: web::Data<EmployeeRepository>,
    input: web::Json<crate::database::models::CreatePayrollInput>,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();

    if !employees.exists(input.employee_id).await? {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    let bonus = input.bonus.unwrap_or_else(BigDecimal::default);
    let deductions = input.deductions.unwrap_or_else(BigDecimal::default);
    let tax_percent = input.tax_percent.unwrap_or_else(BigDecimal::default);

    let breakdown = payroll::compute(&input.basic_salary, &bonus, &deductions, &tax_percent);

    let record = repo
        .create(
            input.employee_id,
            &input.basic_salary,
            &bonus,
            &deductions,
            &tax_percent,
            &breakdown.net_salary,
        )
        .await?;

    Ok(HttpResponse::Created().json(record))
}

pub async fn get_employee_payroll(
    repo: web::Data<PayrollRepository>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    if employee_id <= 0 {
        return Err(AppError::Validation("Invalid employee ID".to_string()));
    }

    let records = repo.list_for_employee(employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}
