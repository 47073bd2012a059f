use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::database::models::{
    LeaveRequest, LeaveRequestWithName, LeaveStatus, PendingLeaveRequest,
};

#[derive(Clone)]
pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a request. Status is always Pending at creation; transitions
    /// happen only through `update_status`.
    pub async fn create(
        &self,
        employee_id: i32,
        date: NaiveDate,
        reason: &str,
    ) -> Result<LeaveRequest> {
        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            INSERT INTO
                leave_requests (employee_id, date, reason, status)
            VALUES
                ($1, $2, $3, $4)
            RETURNING
                id,
                employee_id,
                date,
                reason,
                status
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .bind(reason)
        .bind(LeaveStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn list_for_employee(&self, employee_id: i32) -> Result<Vec<LeaveRequestWithName>> {
        let requests = sqlx::query_as::<_, LeaveRequestWithName>(
            r#"
            SELECT
                lr.id,
                lr.employee_id,
                lr.date,
                lr.reason,
                lr.status,
                e.name AS employee_name
            FROM
                leave_requests lr
                JOIN employee e ON lr.employee_id = e.id
            WHERE
                lr.employee_id = $1
            ORDER BY
                lr.date DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn list_pending(&self) -> Result<Vec<PendingLeaveRequest>> {
        let requests = sqlx::query_as::<_, PendingLeaveRequest>(
            r#"
            SELECT
                lr.id,
                lr.employee_id,
                lr.date,
                lr.reason,
                lr.status,
                e.name AS employee_name,
                e.email AS employee_email
            FROM
                leave_requests lr
                JOIN employee e ON lr.employee_id = e.id
            WHERE
                lr.status = $1
            ORDER BY
                lr.date DESC
            "#,
        )
        .bind(LeaveStatus::Pending)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn pending_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leave_requests WHERE status = $1")
            .bind(LeaveStatus::Pending)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Apply a status transition and return the updated row joined with the
    /// owning employee, or None when the request does not exist.
    pub async fn update_status(
        &self,
        id: i32,
        status: LeaveStatus,
    ) -> Result<Option<PendingLeaveRequest>> {
        let updated = sqlx::query_as::<_, PendingLeaveRequest>(
            r#"
            UPDATE leave_requests lr
            SET
                status = $1
            FROM
                employee e
            WHERE
                lr.id = $2
                AND e.id = lr.employee_id
            RETURNING
                lr.id,
                lr.employee_id,
                lr.date,
                lr.reason,
                lr.status,
                e.name AS employee_name,
                e.email AS employee_email
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }
}
