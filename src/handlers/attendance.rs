use actix_web::{HttpResponse, web};

use crate::database::models::AttendanceInput;
use crate::database::repositories::AttendanceRepository;
use crate::database::repositories::attendance::AttendanceOutcome;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::auth::Claims;

/// Employee submits (or resubmits) today's attendance. One row per employee
/// per calendar day; a resubmission overwrites both times.
pub async fn submit_attendance(
    claims: Claims,
    repo: web::Data<AttendanceRepository>,
    input: web::Json<AttendanceInput>,
) -> Result<HttpResponse, AppError> {
    let employee_id = claims.employee_id()?;
    let input = input.into_inner();

    let outcome = repo
        .submit_for_today(employee_id, input.in_time, input.out_time)
        .await?;

    let message = match outcome {
        AttendanceOutcome::Recorded => "Attendance recorded successfully.",
        AttendanceOutcome::Updated => "Attendance updated successfully.",
    };

    Ok(HttpResponse::Ok().json(ApiResponse::message(message)))
}

pub async fn list_attendance(
    repo: web::Data<AttendanceRepository>,
) -> Result<HttpResponse, AppError> {
    let records = repo.list_with_names().await?;
    Ok(HttpResponse::Ok().json(records))
}
