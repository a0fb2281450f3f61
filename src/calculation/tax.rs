//! Tax deduction policy.
//!
//! Tax is the one pipeline step expected to change: the flat rate here is
//! a placeholder pending integration with the statutory payroll-tax
//! authority. It is modelled as a trait so the rest of the pipeline does
//! not need to change when the real tables arrive.

use rust_decimal::Decimal;

use crate::models::EmployeeType;

/// Placeholder flat tax rate applied to permanent staff.
pub const FLAT_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Determines the tax withheld from gross pay.
pub trait TaxPolicy {
    /// Returns the tax deduction for the given gross pay and employment
    /// category.
    fn tax_deduction(&self, gross_pay: Decimal, employee_type: EmployeeType) -> Decimal;
}

/// A flat-rate tax applied only to permanent employees.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{FlatRateTax, TaxPolicy};
/// use payroll_engine::models::EmployeeType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = FlatRateTax::default();
/// let gross = Decimal::from_str("1000").unwrap();
///
/// assert_eq!(
///     tax.tax_deduction(gross, EmployeeType::Permanent),
///     Decimal::from_str("180.00").unwrap()
/// );
/// assert_eq!(tax.tax_deduction(gross, EmployeeType::Casual), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRateTax {
    /// The fraction of gross pay withheld from permanent staff.
    pub rate: Decimal,
}

impl Default for FlatRateTax {
    fn default() -> Self {
        Self {
            rate: FLAT_TAX_RATE,
        }
    }
}

impl TaxPolicy for FlatRateTax {
    fn tax_deduction(&self, gross_pay: Decimal, employee_type: EmployeeType) -> Decimal {
        match employee_type {
            EmployeeType::Permanent => gross_pay * self.rate,
            EmployeeType::Casual => Decimal::ZERO,
        }
    }
}
