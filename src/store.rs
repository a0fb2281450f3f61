//! Read contracts against the external data store.
//!
//! The engine never persists anything; it performs a sequence of read-only
//! fetches (employee directory, time-record store, loan ledger, settings
//! table) followed by pure in-memory aggregation. This module defines the
//! [`PayrollStore`] trait modelling those contracts and an in-memory
//! implementation used by the HTTP layer and tests.

use chrono::NaiveDate;

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeLoan, EmployeeTypeFilter, PayPeriod, TimeRecord};
use crate::policy::SettingRow;

/// Read-only access to the four external datasets a payroll run consumes.
///
/// Implementations report any fetch failure as a `PayrollError::StoreError`;
/// the engine aborts the whole run on the first failure so that no partial
/// payroll is produced.
pub trait PayrollStore {
    /// Fetches the flat policy settings table.
    fn fetch_settings(&self) -> PayrollResult<Vec<SettingRow>>;

    /// Fetches active employees matching the id set and type filter.
    fn fetch_employees(
        &self,
        employee_ids: &[String],
        type_filter: EmployeeTypeFilter,
    ) -> PayrollResult<Vec<Employee>>;

    /// Fetches all time records dated within the period (inclusive).
    fn fetch_time_records(&self, period: &PayPeriod) -> PayrollResult<Vec<TimeRecord>>;

    /// Fetches active loans with a start date on or before `period_end`.
    fn fetch_loans(&self, period_end: NaiveDate) -> PayrollResult<Vec<EmployeeLoan>>;
}

/// An in-memory [`PayrollStore`] backed by plain vectors.
///
/// The HTTP layer builds one of these from the datasets carried inline in
/// a calculation request; tests build them directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Settings table rows.
    pub settings: Vec<SettingRow>,
    /// Employee directory rows.
    pub employees: Vec<Employee>,
    /// Time-clock records.
    pub time_records: Vec<TimeRecord>,
    /// Loan ledger rows.
    pub loans: Vec<EmployeeLoan>,
}

impl PayrollStore for MemoryStore {
    fn fetch_settings(&self) -> PayrollResult<Vec<SettingRow>> {
        Ok(self.settings.clone())
    }

    fn fetch_employees(
        &self,
        employee_ids: &[String],
        type_filter: EmployeeTypeFilter,
    ) -> PayrollResult<Vec<Employee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.active)
            .filter(|e| employee_ids.iter().any(|id| id == &e.id))
            .filter(|e| type_filter.matches(e.employee_type))
            .cloned()
            .collect())
    }

    fn fetch_time_records(&self, period: &PayPeriod) -> PayrollResult<Vec<TimeRecord>> {
        Ok(self
            .time_records
            .iter()
            .filter(|r| period.contains_date(r.date))
            .cloned()
            .collect())
    }

    fn fetch_loans(&self, period_end: NaiveDate) -> PayrollResult<Vec<EmployeeLoan>> {
        Ok(self
            .loans
            .iter()
            .filter(|l| l.status == crate::models::LoanStatus::Active)
            .filter(|l| l.start_date <= period_end)
            .cloned()
            .collect())
    }
}
