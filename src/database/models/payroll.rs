use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: i32,
    pub employee_id: i32,
    pub basic_salary: BigDecimal,  // NUMERIC(12,2)
    pub bonus: BigDecimal,         // NUMERIC(12,2)
    pub deductions: BigDecimal,    // NUMERIC(12,2)
    pub tax_percent: BigDecimal,   // NUMERIC(5,2)
    pub net_salary: BigDecimal,    // NUMERIC(12,2), derived at creation
    pub payment_date: DateTime<Utc>, // TIMESTAMPTZ, server-assigned
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayrollInput {
    pub employee_id: i32,
    pub basic_salary: BigDecimal,
    #[serde(default)]
    pub bonus: Option<BigDecimal>,
    #[serde(default)]
    pub deductions: Option<BigDecimal>,
    #[serde(default)]
    pub tax_percent: Option<BigDecimal>,
}
