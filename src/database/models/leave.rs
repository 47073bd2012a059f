use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i32,
    pub employee_id: i32,
    pub date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
}

/// Leave request joined with the owning employee's name, as listed for the
/// requesting employee.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestWithName {
    pub id: i32,
    pub employee_id: i32,
    pub date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub employee_name: String,
}

/// Pending leave request joined with employee contact fields, as listed in
/// the admin review queue.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PendingLeaveRequest {
    pub id: i32,
    pub employee_id: i32,
    pub date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub employee_name: String,
    pub employee_email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateLeaveInput {
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLeaveStatusInput {
    pub status: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    pub enum LeaveStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}
