//! Payroll result models.
//!
//! This module contains the [`PayrollCalculation`] row emitted per employee
//! and the [`PayrollRun`] envelope that carries all rows for one invocation
//! together with any warnings raised along the way.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeType, PayPeriod};

/// The per-employee pay breakdown for one pay period.
///
/// All monetary fields are non-negative except `net_pay`, which may go
/// negative when deductions exceed gross pay; the engine reports that as a
/// warning on the run rather than flooring the value.
///
/// The following invariants hold for every row the engine emits:
/// - `gross_pay = regular_pay + overtime_pay`
/// - `other_deductions = lateness_penalty + loan_deductions`
/// - `net_pay = gross_pay - tax_deduction - other_deductions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// The employee this row belongs to.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employment category.
    pub employee_type: EmployeeType,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Hours deducted for unpaid breaks (0 or 1).
    pub break_deduction_hours: Decimal,
    /// Total penalty for accumulated lateness.
    pub lateness_penalty: Decimal,
    /// Total loan installments deducted this period.
    pub loan_deductions: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for overtime hours (time and a half).
    pub overtime_pay: Decimal,
    /// Regular plus overtime pay.
    pub gross_pay: Decimal,
    /// Tax withheld from gross pay.
    pub tax_deduction: Decimal,
    /// Lateness penalty plus loan deductions.
    pub other_deductions: Decimal,
    /// Gross pay less tax and other deductions. May be negative.
    pub net_pay: Decimal,
}

/// The severity of a payroll warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; no action required.
    Low,
    /// Worth reviewing before the run is paid out.
    Medium,
    /// Likely requires manual correction.
    High,
}

/// A warning raised during a payroll run.
///
/// Warnings indicate conditions that do not prevent calculation but may
/// require attention, such as a negative net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

/// The complete result of one payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, PayrollRun};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let run = PayrollRun {
///     run_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     },
///     results: vec![],
///     warnings: vec![],
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Correlation id for this run.
    pub run_id: Uuid,
    /// When the run was produced.
    pub generated_at: DateTime<Utc>,
    /// The pay period the run covers.
    pub period: PayPeriod,
    /// One row per employee with at least one time record in the period.
    /// Row order is unspecified; callers must not depend on it.
    pub results: Vec<PayrollCalculation>,
    /// Warnings raised during the run.
    pub warnings: Vec<PayrollWarning>,
}

impl PayrollWarning {
    /// Warning code for a row whose deductions exceed gross pay.
    pub const NEGATIVE_NET_PAY: &'static str = "NEGATIVE_NET_PAY";

    /// Builds the warning for a negative net pay row.
    pub fn negative_net_pay(employee_id: &str, net_pay: Decimal) -> Self {
        Self {
            code: Self::NEGATIVE_NET_PAY.to_string(),
            message: format!(
                "Net pay for employee '{}' is negative ({}) because deductions exceed gross pay",
                employee_id, net_pay
            ),
            severity: WarningSeverity::High,
        }
    }
}
