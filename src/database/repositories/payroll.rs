use anyhow::Result;
use bigdecimal::BigDecimal;
use sqlx::PgPool;

use crate::database::models::PayrollRecord;

#[derive(Clone)]
pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a payroll row. `net_salary` is the precomputed derivation;
    /// `payment_date` is assigned by the database clock.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        employee_id: i32,
        basic_salary: &BigDecimal,
        bonus: &BigDecimal,
        deductions: &BigDecimal,
        tax_percent: &BigDecimal,
        net_salary: &BigDecimal,
    ) -> Result<PayrollRecord> {
        let record = sqlx::query_as::<_, PayrollRecord>(
            r#"
            INSERT INTO
                payroll (
                    employee_id,
                    basic_salary,
                    bonus,
                    deductions,
                    tax_percent,
                    net_salary,
                    payment_date
                )
            VALUES
                ($1, $2, $3, $4, $5, $6, now())
            RETURNING
                id,
                employee_id,
                basic_salary,
                bonus,
                deductions,
                tax_percent,
                net_salary,
                payment_date
            "#,
        )
        .bind(employee_id)
        .bind(basic_salary)
        .bind(bonus)
        .bind(deductions)
        .bind(tax_percent)
        .bind(net_salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn list_for_employee(&self, employee_id: i32) -> Result<Vec<PayrollRecord>> {
        let records = sqlx::query_as::<_, PayrollRecord>(
            r#"
            SELECT
                id,
                employee_id,
                basic_salary,
                bonus,
                deductions,
                tax_percent,
                net_salary,
                payment_date
            FROM
                payroll
            WHERE
                employee_id = $1
            ORDER BY
                payment_date DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
