use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::database::models::AttendanceWithName;

/// Outcome of a daily attendance submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceOutcome {
    Recorded,
    Updated,
}

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert today's attendance row for the employee, or overwrite the
    /// existing one. A single upsert keyed on (employee_id, work_date) keeps
    /// the at-most-one-row-per-day guarantee under concurrent submissions;
    /// "today" is the database server's calendar date. Last submission wins.
    pub async fn submit_for_today(
        &self,
        employee_id: i32,
        in_time: DateTime<Utc>,
        out_time: DateTime<Utc>,
    ) -> Result<AttendanceOutcome> {
        // xmax = 0 holds only for freshly inserted rows, which tells an
        // insert apart from a conflict-update.
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO
                attendance (employee_id, work_date, in_time, out_time)
            VALUES
                ($1, CURRENT_DATE, $2, $3)
            ON CONFLICT (employee_id, work_date) DO UPDATE
            SET
                in_time = EXCLUDED.in_time,
                out_time = EXCLUDED.out_time
            RETURNING
                (xmax = 0)
            "#,
        )
        .bind(employee_id)
        .bind(in_time)
        .bind(out_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(if inserted {
            AttendanceOutcome::Recorded
        } else {
            AttendanceOutcome::Updated
        })
    }

    pub async fn list_with_names(&self) -> Result<Vec<AttendanceWithName>> {
        let records = sqlx::query_as::<_, AttendanceWithName>(
            r#"
            SELECT
                a.employee_id,
                e.name AS employee_name,
                a.in_time,
                a.out_time
            FROM
                attendance a
                JOIN employee e ON a.employee_id = e.id
            ORDER BY
                a.in_time DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
