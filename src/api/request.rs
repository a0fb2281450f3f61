//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/policy/reload` endpoints. The calculation request carries the
//! three datasets inline; they back the in-memory store the engine reads
//! from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::EmployeeSelection;
use crate::models::{
    Employee, EmployeeLoan, EmployeeType, EmployeeTypeFilter, LoanStatus, PayPeriod, TimeRecord,
};
use crate::policy::SettingRow;
use crate::store::MemoryStore;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The pay period for the calculation.
    pub period: PayPeriodRequest,
    /// The employee selection.
    pub selection: SelectionRequest,
    /// The employee directory rows.
    pub employees: Vec<EmployeeRequest>,
    /// The time-clock records.
    #[serde(default)]
    pub time_records: Vec<TimeRecordRequest>,
    /// The loan ledger rows.
    #[serde(default)]
    pub loans: Vec<LoanRequest>,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Employee selection in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Candidate employee ids.
    pub employee_ids: Vec<String>,
    /// Employment-type filter; defaults to "all".
    #[serde(default)]
    pub employee_type: EmployeeTypeFilter,
    /// Organization filter; reserved for future use.
    #[serde(default)]
    pub organization: Option<String>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employment category.
    pub employee_type: EmployeeType,
    /// The base hourly rate of pay.
    pub hourly_rate: Decimal,
    /// The time-clock identifier, when one is assigned.
    #[serde(default)]
    pub clock_number: Option<String>,
    /// Whether the employee is currently active. Defaults to true.
    #[serde(default = "default_active")]
    pub active: bool,
    /// The organization or site the employee belongs to.
    #[serde(default)]
    pub organization: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Time record information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRecordRequest {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The external clock identifier, for clock-imported rows.
    #[serde(default)]
    pub clock_number: Option<String>,
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// Total hours worked on this date.
    pub total_hours: Decimal,
    /// Minutes late to the shift start.
    #[serde(default)]
    pub late_minutes: u32,
}

/// Loan ledger information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
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

/// Request body for the `/policy/reload` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyReloadRequest {
    /// The flat settings table rows.
    pub settings: Vec<SettingRowRequest>,
}

/// A settings table row in a reload request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingRowRequest {
    /// The setting key.
    pub key: String,
    /// The string-encoded numeric value.
    pub value: String,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<SelectionRequest> for EmployeeSelection {
    fn from(req: SelectionRequest) -> Self {
        EmployeeSelection {
            employee_ids: req.employee_ids,
            type_filter: req.employee_type,
            organization: req.organization,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            employee_type: req.employee_type,
            hourly_rate: req.hourly_rate,
            clock_number: req.clock_number,
            active: req.active,
            organization: req.organization,
        }
    }
}

impl From<TimeRecordRequest> for TimeRecord {
    fn from(req: TimeRecordRequest) -> Self {
        TimeRecord {
            employee_id: req.employee_id,
            clock_number: req.clock_number,
            date: req.date,
            total_hours: req.total_hours,
            late_minutes: req.late_minutes,
        }
    }
}

impl From<LoanRequest> for EmployeeLoan {
    fn from(req: LoanRequest) -> Self {
        EmployeeLoan {
            employee_id: req.employee_id,
            status: req.status,
            start_date: req.start_date,
            outstanding_balance: req.outstanding_balance,
            monthly_payment: req.monthly_payment,
        }
    }
}

impl From<SettingRowRequest> for SettingRow {
    fn from(req: SettingRowRequest) -> Self {
        SettingRow {
            key: req.key,
            value: req.value,
        }
    }
}

impl CalculationRequest {
    /// Builds the in-memory store backing this request's datasets.
    pub fn into_store(self) -> (MemoryStore, PayPeriod, EmployeeSelection) {
        let period: PayPeriod = self.period.into();
        let selection: EmployeeSelection = self.selection.into();
        let store = MemoryStore {
            settings: Vec::new(),
            employees: self.employees.into_iter().map(Into::into).collect(),
            time_records: self.time_records.into_iter().map(Into::into).collect(),
            loans: self.loans.into_iter().map(Into::into).collect(),
        };
        (store, period, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "period": {"start_date": "2026-01-01", "end_date": "2026-01-31"},
            "selection": {"employee_ids": ["emp_001"], "employee_type": "all"},
            "employees": [
                {
                    "id": "emp_001",
                    "name": "Asha Mwangi",
                    "employee_type": "casual",
                    "hourly_rate": "50"
                }
            ],
            "time_records": [
                {
                    "employee_id": "emp_001",
                    "date": "2026-01-15",
                    "total_hours": "13",
                    "late_minutes": 22
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.selection.employee_ids, vec!["emp_001"]);
        assert_eq!(request.selection.employee_type, EmployeeTypeFilter::All);
        assert!(request.employees[0].active);
        assert!(request.loans.is_empty());
    }

    #[test]
    fn test_into_store() {
        let request = CalculationRequest {
            period: PayPeriodRequest {
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            },
            selection: SelectionRequest {
                employee_ids: vec!["emp_001".to_string()],
                employee_type: EmployeeTypeFilter::Casual,
                organization: None,
            },
            employees: vec![],
            time_records: vec![],
            loans: vec![],
        };

        let (store, period, selection) = request.into_store();
        assert!(store.employees.is_empty());
        assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(selection.type_filter, EmployeeTypeFilter::Casual);
    }

    #[test]
    fn test_deserialize_policy_reload_request() {
        let json = r#"{"settings": [{"key": "shift_hours", "value": "10"}]}"#;
        let request: PolicyReloadRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.settings.len(), 1);
        assert_eq!(request.settings[0].key, "shift_hours");
    }
}
