//! Employee loan model.
//!
//! This module defines the [`EmployeeLoan`] ledger entry and its status.
//! The engine only reads loans; closing a loan and reducing its balance
//! are the ledger's responsibility.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The lifecycle status of an employee loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// The loan is being repaid and contributes a deduction each period.
    Active,
    /// The loan is fully repaid or written off.
    Closed,
}

/// An entry in the employee loan ledger.
///
/// A loan qualifies for deduction in a pay period when it is active, its
/// start date is on or before the period end, and its outstanding balance
/// is positive. The deduction is always the full monthly payment; no
/// pro-rating is applied for partial-period overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLoan {
    /// The employee the loan belongs to.
    pub employee_id: String,
    /// The loan's lifecycle status.
    pub status: LoanStatus,
    /// The date the loan was issued.
    pub start_date: NaiveDate,
    /// The remaining balance on the loan.
    pub outstanding_balance: Decimal,
    /// The installment deducted each pay period.
    pub monthly_payment: Decimal,
}

impl EmployeeLoan {
    /// Returns true if this loan contributes a deduction for a period
    /// ending on `period_end`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeLoan, LoanStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let loan = EmployeeLoan {
    ///     employee_id: "emp_001".to_string(),
    ///     status: LoanStatus::Active,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    ///     outstanding_balance: Decimal::from_str("400").unwrap(),
    ///     monthly_payment: Decimal::from_str("100").unwrap(),
    /// };
    /// let period_end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    /// assert!(loan.qualifies_for(period_end));
    /// ```
    pub fn qualifies_for(&self, period_end: NaiveDate) -> bool {
        self.status == LoanStatus::Active
            && self.start_date <= period_end
            && self.outstanding_balance > Decimal::ZERO
    }
}
