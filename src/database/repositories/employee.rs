use anyhow::Result;
use sqlx::PgPool;

use crate::database::models::{Employee, EmployeeInfo};

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<EmployeeInfo> {
        let employee = sqlx::query_as::<_, EmployeeInfo>(
            r#"
            INSERT INTO
                employee (name, email, phone, password_hash)
            VALUES
                ($1, $2, $3, $4)
            RETURNING
                id,
                name,
                email,
                phone
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT
                id,
                name,
                email,
                phone,
                password_hash
            FROM
                employee
            WHERE
                email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn list(&self) -> Result<Vec<EmployeeInfo>> {
        let employees = sqlx::query_as::<_, EmployeeInfo>(
            r#"
            SELECT
                id,
                name,
                email,
                phone
            FROM
                employee
            ORDER BY
                id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Option<EmployeeInfo>> {
        let employee = sqlx::query_as::<_, EmployeeInfo>(
            r#"
            UPDATE employee
            SET
                name = $1,
                email = $2,
                phone = $3
            WHERE
                id = $4
            RETURNING
                id,
                name,
                email,
                phone
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Delete an employee together with their payroll rows. Both statements
    /// run in one transaction so a failure leaves the store untouched.
    pub async fn delete_cascade(&self, id: i32) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM payroll WHERE employee_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(deleted.rows_affected() > 0)
    }
}
