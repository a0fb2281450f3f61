//! Loan deduction rule.
//!
//! Every qualifying active loan contributes its full monthly payment to
//! the period's deductions. The engine never reduces loan balances; the
//! ledger stops a loan from qualifying once its balance reaches zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::EmployeeLoan;

/// Sums the monthly payments of an employee's qualifying loans.
///
/// A loan qualifies when it is active, started on or before `period_end`,
/// and carries a positive outstanding balance. The installment is not
/// pro-rated for partial-period overlap.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::sum_loan_deductions;
/// use payroll_engine::models::{EmployeeLoan, LoanStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loans = vec![EmployeeLoan {
///     employee_id: "emp_001".to_string(),
///     status: LoanStatus::Active,
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     outstanding_balance: Decimal::from_str("400").unwrap(),
///     monthly_payment: Decimal::from_str("100").unwrap(),
/// }];
///
/// let period_end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// let total = sum_loan_deductions("emp_001", &loans, period_end);
/// assert_eq!(total, Decimal::from_str("100").unwrap());
/// ```
pub fn sum_loan_deductions(
    employee_id: &str,
    loans: &[EmployeeLoan],
    period_end: NaiveDate,
) -> Decimal {
    loans
        .iter()
        .filter(|loan| loan.employee_id == employee_id)
        .filter(|loan| loan.qualifies_for(period_end))
        .map(|loan| loan.monthly_payment)
        .sum()
}
