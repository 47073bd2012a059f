use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attendance row joined with the employee's name, for the admin listing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithName {
    pub employee_id: i32,
    pub employee_name: String,
    pub in_time: DateTime<Utc>,
    pub out_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceInput {
    pub in_time: DateTime<Utc>,
    pub out_time: DateTime<Utc>,
}
