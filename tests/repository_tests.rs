use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;

use payroll_be::database::models::CreateEmployeeInput;
use payroll_be::database::repositories::attendance::AttendanceOutcome;
use payroll_be::database::repositories::{
    AdminRepository, AttendanceRepository, EmployeeRepository, PayrollRepository,
};
use payroll_be::{AppError, AuthService};

mod common;

use common::{TestDb, test_config, unique_email};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[tokio::test]
async fn resubmitting_todays_attendance_keeps_one_row_with_the_new_times() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let employees = EmployeeRepository::new(db.pool.clone());
    let attendance = AttendanceRepository::new(db.pool.clone());

    let employee = employees
        .create("Pat Doe", &unique_email("attendance"), "555-0100", "hash")
        .await
        .unwrap();

    // Whole-second timestamps survive the round trip through TIMESTAMPTZ
    let first_in = Utc.with_ymd_and_hms(2026, 8, 23, 9, 0, 0).unwrap();
    let first_out = Utc.with_ymd_and_hms(2026, 8, 23, 17, 0, 0).unwrap();
    let second_in = Utc.with_ymd_and_hms(2026, 8, 23, 9, 15, 0).unwrap();
    let second_out = Utc.with_ymd_and_hms(2026, 8, 23, 17, 30, 0).unwrap();

    let outcome = attendance
        .submit_for_today(employee.id, first_in, first_out)
        .await
        .unwrap();
    assert_eq!(outcome, AttendanceOutcome::Recorded);

    let outcome = attendance
        .submit_for_today(employee.id, second_in, second_out)
        .await
        .unwrap();
    assert_eq!(outcome, AttendanceOutcome::Updated);

    // Exactly one row, carrying the second submission's times
    let rows: Vec<(DateTime<Utc>, DateTime<Utc>)> =
        sqlx::query_as("SELECT in_time, out_time FROM attendance WHERE employee_id = $1")
            .bind(employee.id)
            .fetch_all(&db.pool)
            .await
            .unwrap();
    assert_eq!(rows, vec![(second_in, second_out)]);

    employees.delete_cascade(employee.id).await.unwrap();
}

#[tokio::test]
async fn deleting_an_employee_removes_their_payroll_history() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let employees = EmployeeRepository::new(db.pool.clone());
    let payroll = PayrollRepository::new(db.pool.clone());

    let employee = employees
        .create("Lee Cruz", &unique_email("delete"), "555-0101", "hash")
        .await
        .unwrap();

    for _ in 0..2 {
        payroll
            .create(
                employee.id,
                &dec("1000"),
                &dec("100"),
                &dec("50"),
                &dec("10"),
                &dec("940"),
            )
            .await
            .unwrap();
    }
    assert_eq!(
        payroll.list_for_employee(employee.id).await.unwrap().len(),
        2
    );

    assert!(employees.delete_cascade(employee.id).await.unwrap());

    assert!(
        payroll
            .list_for_employee(employee.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(!employees.exists(employee.id).await.unwrap());

    // A second delete finds nothing
    assert!(!employees.delete_cascade(employee.id).await.unwrap());
}

#[tokio::test]
async fn duplicate_registration_conflicts_and_creates_no_second_record() {
    let Some(db) = TestDb::connect().await else {
        return;
    };
    let employees = EmployeeRepository::new(db.pool.clone());
    let auth = AuthService::new(
        AdminRepository::new(db.pool.clone()),
        employees.clone(),
        test_config(),
    );

    let email = unique_email("signup");
    let first = auth
        .register_employee(CreateEmployeeInput {
            name: "Sam Reyes".to_string(),
            email: email.clone(),
            phone: "555-0102".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    let err = auth
        .register_employee(CreateEmployeeInput {
            name: "Sam Again".to_string(),
            email: email.clone(),
            phone: "555-0103".to_string(),
            password: "hunter3".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Email already registered");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE email = $1")
        .bind(&email)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    employees.delete_cascade(first.id).await.unwrap();
}
