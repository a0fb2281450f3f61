//! Employee model and related types.
//!
//! This module defines the Employee struct, the EmployeeType enum, and the
//! EmployeeTypeFilter used to narrow a payroll run to one staff category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the employment category of a worker.
///
/// The category determines the lateness penalty rate and whether the
/// flat-rate tax deduction applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Casual staff paid only for hours worked, untaxed at source.
    Casual,
    /// Permanent staff subject to the flat tax deduction.
    Permanent,
}

/// Filter applied to the employee selection of a payroll run.
///
/// `All` is a pass-through that disables type filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeTypeFilter {
    /// No filtering; every employee type passes.
    #[default]
    All,
    /// Only casual employees pass.
    Casual,
    /// Only permanent employees pass.
    Permanent,
}

impl EmployeeTypeFilter {
    /// Returns true if an employee of the given type passes this filter.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeType, EmployeeTypeFilter};
    ///
    /// assert!(EmployeeTypeFilter::All.matches(EmployeeType::Casual));
    /// assert!(EmployeeTypeFilter::Casual.matches(EmployeeType::Casual));
    /// assert!(!EmployeeTypeFilter::Permanent.matches(EmployeeType::Casual));
    /// ```
    pub fn matches(&self, employee_type: EmployeeType) -> bool {
        match self {
            EmployeeTypeFilter::All => true,
            EmployeeTypeFilter::Casual => employee_type == EmployeeType::Casual,
            EmployeeTypeFilter::Permanent => employee_type == EmployeeType::Permanent,
        }
    }
}

/// Represents an employee subject to payroll calculation.
///
/// Employees are external entities; the calculator only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employment category.
    pub employee_type: EmployeeType,
    /// The base hourly rate of pay.
    pub hourly_rate: Decimal,
    /// The time-clock identifier used to correlate time records, when the
    /// clock system assigns one distinct from the internal id.
    #[serde(default)]
    pub clock_number: Option<String>,
    /// Whether the employee is currently active.
    pub active: bool,
    /// The organization or site the employee belongs to.
    #[serde(default)]
    pub organization: Option<String>,
}

impl Employee {
    /// Returns true if a time record belongs to this employee.
    ///
    /// A record matches on either the internal employee id or the external
    /// clock number. The dual key exists because the time-clock hardware
    /// reports its own identifier for some sites.
    pub fn owns_record(&self, record: &crate::models::TimeRecord) -> bool {
        if record.employee_id == self.id {
            return true;
        }
        match (&self.clock_number, &record.clock_number) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}
