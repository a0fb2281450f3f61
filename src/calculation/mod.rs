//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the rule functions that make up the payroll
//! pipeline: unpaid-break deduction, regular/overtime split, lateness
//! penalty banding, loan deduction, the swappable tax policy, and the
//! [`PayrollCalculator`] that applies them in a fixed order.

mod break_deduction;
mod engine;
mod lateness_penalty;
mod loan_deduction;
mod overtime_split;
mod tax;

pub use break_deduction::{
    BreakDeductionResult, FULL_BREAK_DEDUCTION_HOURS, SHIFT_CLAMP_WINDOW_HOURS,
    apply_break_deduction,
};
pub use engine::{EmployeeSelection, PayrollCalculator};
pub use lateness_penalty::{LATENESS_BAND_MINUTES, lateness_penalty};
pub use loan_deduction::sum_loan_deductions;
pub use overtime_split::{OVERTIME_PAY_MULTIPLIER, OvertimeSplit, split_overtime};
pub use tax::{FLAT_TAX_RATE, FlatRateTax, TaxPolicy};
