//! Time record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's time-clock entry for one employee.
///
/// Multiple records per employee per period are expected; the calculator
/// aggregates `total_hours` and `late_minutes` by summation. A record is
/// linked to its employee by internal id or, for clock-imported rows, by
/// the external clock number.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TimeRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = TimeRecord {
///     employee_id: "emp_001".to_string(),
///     clock_number: None,
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     total_hours: Decimal::from_str("12.5").unwrap(),
///     late_minutes: 15,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The external clock identifier, when the row came from the clock
    /// hardware rather than the employee directory.
    #[serde(default)]
    pub clock_number: Option<String>,
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// Total hours worked on this date.
    pub total_hours: Decimal,
    /// Minutes late to the shift start.
    pub late_minutes: u32,
}
