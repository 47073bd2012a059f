use std::sync::LazyLock;

use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::config::Config;
use crate::database::models::{CreateLeaveInput, LeaveRequest, LeaveStatus, UpdateLeaveStatusInput};
use crate::database::repositories::LeaveRepository;
use crate::error::AppError;
use crate::services::auth::Claims;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Validate the submitted leave date: `YYYY-MM-DD` shape and a real
/// calendar date.
fn parse_leave_date(raw: &str) -> Result<NaiveDate, AppError> {
    if !DATE_SHAPE.is_match(raw) {
        return Err(AppError::Validation(
            "Invalid date format. Use YYYY-MM-DD".to_string(),
        ));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date".to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCreatedResponse {
    pub message: String,
    pub leave_request: LeaveRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusResponse {
    pub message: String,
    pub leave_request: LeaveRequest,
    pub employee: serde_json::Value,
}

/// Submit a leave request. The employee id comes from the token, never the
/// body, and the status is always Pending at creation.
pub async fn create_leave(
    claims: Claims,
    repo: web::Data<LeaveRepository>,
    input: web::Json<CreateLeaveInput>,
) -> Result<HttpResponse, AppError> {
    let employee_id = claims.employee_id()?;
    let input = input.into_inner();
    let date = parse_leave_date(&input.date)?;

    let leave_request = repo.create(employee_id, date, &input.reason).await?;

    Ok(HttpResponse::Created().json(LeaveCreatedResponse {
        message: "Leave request submitted successfully".to_string(),
        leave_request,
    }))
}

pub async fn my_leaves(
    claims: Claims,
    repo: web::Data<LeaveRepository>,
) -> Result<HttpResponse, AppError> {
    let employee_id = claims.employee_id()?;
    let requests = repo.list_for_employee(employee_id).await?;
    Ok(HttpResponse::Ok().json(requests))
}

pub async fn pending_leaves(repo: web::Data<LeaveRepository>) -> Result<HttpResponse, AppError> {
    let requests = repo.list_pending().await?;
    Ok(HttpResponse::Ok().json(requests))
}

pub async fn pending_leaves_count(
    repo: web::Data<LeaveRepository>,
) -> Result<HttpResponse, AppError> {
    let count = repo.pending_count().await?;
    Ok(HttpResponse::Ok().json(json!({ "count": count })))
}

/// Admin status transition: Pending/Approved/Rejected only.
pub async fn update_leave_status(
    repo: web::Data<LeaveRepository>,
    config: web::Data<Config>,
    path: web::Path<i32>,
    input: web::Json<UpdateLeaveStatusInput>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let status: LeaveStatus = input
        .status
        .parse()
        .map_err(|_| AppError::Validation("Invalid status".to_string()))?;

    let updated = repo.update_status(id, status).await.map_err(|err| {
        // Internal detail reaches the client only outside production
        log::error!("Error updating leave status for request {}: {}", id, err);
        if config.is_production() {
            AppError::Internal(None)
        } else {
            AppError::Internal(Some(err.to_string()))
        }
    })?;

    let updated = updated.ok_or_else(|| AppError::NotFound("Leave request not found".to_string()))?;

    Ok(HttpResponse::Ok().json(LeaveStatusResponse {
        message: "Leave status updated successfully".to_string(),
        employee: json!({
            "name": updated.employee_name,
            "email": updated.employee_email,
        }),
        leave_request: LeaveRequest {
            id: updated.id,
            employee_id: updated.employee_id,
            date: updated.date,
            reason: updated.reason,
            status: updated.status,
        },
    }))
}
