//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod loan;
mod pay_period;
mod payroll_result;
mod time_record;

pub use employee::{Employee, EmployeeType, EmployeeTypeFilter};
pub use loan::{EmployeeLoan, LoanStatus};
pub use pay_period::PayPeriod;
pub use payroll_result::{PayrollCalculation, PayrollRun, PayrollWarning, WarningSeverity};
pub use time_record::TimeRecord;
