//! The payroll calculator.
//!
//! Orchestrates the rule pipeline over the external datasets: per selected
//! employee it aggregates time records, applies the break, overtime,
//! lateness, and loan rules in that fixed order, then prices the hours and
//! assembles one [`PayrollCalculation`] row.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Employee, EmployeeType, EmployeeTypeFilter, PayPeriod, PayrollCalculation, PayrollRun,
    PayrollWarning, TimeRecord,
};
use crate::policy::PolicySettings;
use crate::store::PayrollStore;

use super::break_deduction::apply_break_deduction;
use super::lateness_penalty::lateness_penalty;
use super::loan_deduction::sum_loan_deductions;
use super::overtime_split::{OVERTIME_PAY_MULTIPLIER, split_overtime};
use super::tax::{FlatRateTax, TaxPolicy};

/// The employee selection for one payroll run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSelection {
    /// Candidate employee ids. Must be non-empty; employees with zero
    /// matching time records are silently excluded from the output.
    pub employee_ids: Vec<String>,
    /// Employment-type filter; `All` disables filtering.
    pub type_filter: EmployeeTypeFilter,
    /// Organization filter. Accepted but reserved for future use; it has
    /// no filtering effect yet.
    pub organization: Option<String>,
}

/// Calculates per-employee pay breakdowns for a pay period.
///
/// The calculator is a pure function over the datasets it reads through
/// [`PayrollStore`], parameterized by [`PolicySettings`] and a swappable
/// [`TaxPolicy`]. It holds no mutable state; concurrent runs with
/// different settings are independent.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::policy::PolicySettings;
///
/// let calculator = PayrollCalculator::new(PolicySettings::default());
/// assert_eq!(calculator.settings().shift_hours.to_string(), "12");
/// ```
pub struct PayrollCalculator {
    settings: PolicySettings,
    tax_policy: Box<dyn TaxPolicy + Send + Sync>,
}

impl PayrollCalculator {
    /// Creates a calculator with the given settings and the placeholder
    /// flat-rate tax.
    pub fn new(settings: PolicySettings) -> Self {
        Self::with_tax_policy(settings, Box::new(FlatRateTax::default()))
    }

    /// Creates a calculator with an explicit tax policy.
    pub fn with_tax_policy(
        settings: PolicySettings,
        tax_policy: Box<dyn TaxPolicy + Send + Sync>,
    ) -> Self {
        Self {
            settings,
            tax_policy,
        }
    }

    /// Returns the policy settings this calculator was built with.
    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    /// Runs the payroll calculation for one pay period.
    ///
    /// Returns one row per selected employee that has at least one time
    /// record in the period. Row order is unspecified. Any store fetch
    /// failure aborts the whole run; no partial results are returned.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::EmptySelection`] if `selection.employee_ids` is
    ///   empty
    /// - [`PayrollError::InvalidEmployee`] for a negative hourly rate
    /// - [`PayrollError::InvalidTimeRecord`] for negative clocked hours
    /// - [`PayrollError::StoreError`] for any upstream fetch failure
    pub fn calculate(
        &self,
        store: &dyn PayrollStore,
        period: &PayPeriod,
        selection: &EmployeeSelection,
    ) -> PayrollResult<PayrollRun> {
        if selection.employee_ids.is_empty() {
            return Err(PayrollError::EmptySelection);
        }

        let employees = store.fetch_employees(&selection.employee_ids, selection.type_filter)?;
        let time_records = store.fetch_time_records(period)?;
        let loans = store.fetch_loans(period.end_date)?;

        validate_employees(&employees)?;
        validate_time_records(&time_records)?;

        let mut results = Vec::new();
        let mut warnings = Vec::new();

        for employee in &employees {
            let matched: Vec<&TimeRecord> = time_records
                .iter()
                .filter(|r| employee.owns_record(r))
                .collect();

            // No time records in the window means no row, not a zero row.
            if matched.is_empty() {
                continue;
            }

            let raw_hours: Decimal = matched.iter().map(|r| r.total_hours).sum();
            let total_late_minutes: u32 = matched.iter().map(|r| r.late_minutes).sum();

            let break_result = apply_break_deduction(
                raw_hours,
                self.settings.unpaid_break_threshold_hours,
                self.settings.shift_hours,
            );

            let split = split_overtime(
                break_result.effective_hours,
                self.settings.overtime_threshold_hours,
            );

            let penalty_rate = match employee.employee_type {
                EmployeeType::Casual => self.settings.casual_lateness_penalty_rate,
                EmployeeType::Permanent => self.settings.permanent_lateness_penalty_rate,
            };
            let penalty = lateness_penalty(total_late_minutes, penalty_rate);

            let loan_deductions = sum_loan_deductions(&employee.id, &loans, period.end_date);

            let regular_pay = split.regular_hours * employee.hourly_rate;
            let overtime_pay =
                split.overtime_hours * employee.hourly_rate * OVERTIME_PAY_MULTIPLIER;
            let gross_pay = regular_pay + overtime_pay;

            let tax_deduction = self
                .tax_policy
                .tax_deduction(gross_pay, employee.employee_type);

            let other_deductions = penalty + loan_deductions;
            let net_pay = gross_pay - tax_deduction - other_deductions;

            if net_pay < Decimal::ZERO {
                warnings.push(PayrollWarning::negative_net_pay(&employee.id, net_pay));
            }

            results.push(PayrollCalculation {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                employee_type: employee.employee_type,
                regular_hours: split.regular_hours,
                overtime_hours: split.overtime_hours,
                break_deduction_hours: break_result.deduction_hours,
                lateness_penalty: penalty,
                loan_deductions,
                regular_pay,
                overtime_pay,
                gross_pay,
                tax_deduction,
                other_deductions,
                net_pay,
            });
        }

        Ok(PayrollRun {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            period: *period,
            results,
            warnings,
        })
    }
}

fn validate_employees(employees: &[Employee]) -> PayrollResult<()> {
    for employee in employees {
        if employee.hourly_rate < Decimal::ZERO {
            return Err(PayrollError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!(
                    "cannot be negative for employee '{}'",
                    employee.id
                ),
            });
        }
    }
    Ok(())
}

fn validate_time_records(records: &[TimeRecord]) -> PayrollResult<()> {
    for record in records {
        if record.total_hours < Decimal::ZERO {
            return Err(PayrollError::InvalidTimeRecord {
                employee_id: record.employee_id.clone(),
                message: "total_hours cannot be negative".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeLoan, LoanStatus};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(id: &str, employee_type: EmployeeType, rate: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            employee_type,
            hourly_rate: dec(rate),
            clock_number: None,
            active: true,
            organization: None,
        }
    }

    fn record(employee_id: &str, day: u32, hours: &str, late: u32) -> TimeRecord {
        TimeRecord {
            employee_id: employee_id.to_string(),
            clock_number: None,
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            total_hours: dec(hours),
            late_minutes: late,
        }
    }

    fn january() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        }
    }

    fn select(ids: &[&str]) -> EmployeeSelection {
        EmployeeSelection {
            employee_ids: ids.iter().map(|s| s.to_string()).collect(),
            type_filter: EmployeeTypeFilter::All,
            organization: None,
        }
    }

    fn calculator() -> PayrollCalculator {
        PayrollCalculator::new(PolicySettings::default())
    }

    // ==========================================================================
    // PC-001: end-to-end casual scenario
    //
    // One 13-hour record with 22 late minutes at rate 50: the 13 hours sit
    // outside the clamp window so the plain one-hour deduction applies,
    // giving 12 effective hours, a 20 lateness penalty, and net pay 580.
    // ==========================================================================
    #[test]
    fn test_pc_001_casual_end_to_end() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![record("emp_001", 15, "13", 22)],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        assert_eq!(run.results.len(), 1);
        let row = &run.results[0];
        assert_eq!(row.break_deduction_hours, dec("1"));
        assert_eq!(row.regular_hours, dec("12"));
        assert_eq!(row.overtime_hours, dec("0"));
        assert_eq!(row.lateness_penalty, dec("20"));
        assert_eq!(row.regular_pay, dec("600"));
        assert_eq!(row.gross_pay, dec("600"));
        assert_eq!(row.tax_deduction, dec("0"));
        assert_eq!(row.net_pay, dec("580"));
        assert!(run.warnings.is_empty());
    }

    // ==========================================================================
    // PC-002: employees without records are skipped, not zero-rowed
    // ==========================================================================
    #[test]
    fn test_pc_002_zero_record_employee_excluded() {
        let store = MemoryStore {
            employees: vec![
                employee("emp_001", EmployeeType::Casual, "50"),
                employee("emp_002", EmployeeType::Casual, "50"),
            ],
            time_records: vec![record("emp_001", 15, "8", 0)],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001", "emp_002"]))
            .unwrap();

        assert_eq!(run.results.len(), 1);
        assert_eq!(run.results[0].employee_id, "emp_001");
    }

    // ==========================================================================
    // PC-003: records matched by clock number
    // ==========================================================================
    #[test]
    fn test_pc_003_clock_number_matching() {
        let mut emp = employee("emp_001", EmployeeType::Casual, "50");
        emp.clock_number = Some("C-1001".to_string());

        let mut rec = record("clock_import", 15, "8", 0);
        rec.clock_number = Some("C-1001".to_string());

        let store = MemoryStore {
            employees: vec![emp],
            time_records: vec![rec],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        assert_eq!(run.results.len(), 1);
        assert_eq!(run.results[0].regular_hours, dec("7"));
    }

    // ==========================================================================
    // PC-004: multiple records aggregated by summation
    // ==========================================================================
    #[test]
    fn test_pc_004_records_aggregated() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![
                record("emp_001", 12, "12", 5),
                record("emp_001", 13, "12", 8),
                record("emp_001", 14, "12", 12),
                record("emp_001", 15, "12", 0),
            ],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        let row = &run.results[0];
        // 48 raw hours, outside the clamp window, minus the one-hour break.
        assert_eq!(row.regular_hours, dec("40"));
        assert_eq!(row.overtime_hours, dec("7"));
        // 25 cumulative late minutes is two full bands.
        assert_eq!(row.lateness_penalty, dec("20"));
        assert_eq!(row.overtime_pay, dec("525.0"));
        assert_eq!(row.gross_pay, row.regular_pay + row.overtime_pay);
    }

    // ==========================================================================
    // PC-005: permanent employees taxed at the flat rate
    // ==========================================================================
    #[test]
    fn test_pc_005_permanent_tax_and_penalty_rate() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Permanent, "100")],
            time_records: vec![record("emp_001", 15, "8", 30)],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        let row = &run.results[0];
        assert_eq!(row.gross_pay, dec("700"));
        assert_eq!(row.tax_deduction, dec("126.00"));
        // Permanent penalty rate is 20 per band, three bands.
        assert_eq!(row.lateness_penalty, dec("60"));
        assert_eq!(row.net_pay, dec("514.00"));
    }

    // ==========================================================================
    // PC-006: loan deductions and the negative net pay warning
    // ==========================================================================
    #[test]
    fn test_pc_006_loan_deduction() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![record("emp_001", 15, "8", 0)],
            loans: vec![EmployeeLoan {
                employee_id: "emp_001".to_string(),
                status: LoanStatus::Active,
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                outstanding_balance: dec("400"),
                monthly_payment: dec("100"),
            }],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        let row = &run.results[0];
        assert_eq!(row.loan_deductions, dec("100"));
        assert_eq!(row.other_deductions, dec("100"));
        assert_eq!(row.net_pay, dec("250"));
    }

    #[test]
    fn test_pc_006b_negative_net_pay_warned_not_floored() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "10")],
            time_records: vec![record("emp_001", 15, "4", 0)],
            loans: vec![EmployeeLoan {
                employee_id: "emp_001".to_string(),
                status: LoanStatus::Active,
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                outstanding_balance: dec("5000"),
                monthly_payment: dec("500"),
            }],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        let row = &run.results[0];
        assert_eq!(row.net_pay, dec("-460"));
        assert_eq!(run.warnings.len(), 1);
        assert_eq!(run.warnings[0].code, PayrollWarning::NEGATIVE_NET_PAY);
    }

    // ==========================================================================
    // PC-007: selection filters
    // ==========================================================================
    #[test]
    fn test_pc_007_type_filter_applies() {
        let store = MemoryStore {
            employees: vec![
                employee("emp_001", EmployeeType::Casual, "50"),
                employee("emp_002", EmployeeType::Permanent, "50"),
            ],
            time_records: vec![record("emp_001", 15, "8", 0), record("emp_002", 15, "8", 0)],
            ..Default::default()
        };

        let mut selection = select(&["emp_001", "emp_002"]);
        selection.type_filter = EmployeeTypeFilter::Permanent;

        let run = calculator()
            .calculate(&store, &january(), &selection)
            .unwrap();

        assert_eq!(run.results.len(), 1);
        assert_eq!(run.results[0].employee_id, "emp_002");
    }

    #[test]
    fn test_pc_007b_records_outside_period_ignored() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![TimeRecord {
                employee_id: "emp_001".to_string(),
                clock_number: None,
                date: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
                total_hours: dec("8"),
                late_minutes: 0,
            }],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        assert!(run.results.is_empty());
    }

    #[test]
    fn test_pc_007c_organization_filter_is_a_no_op() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![record("emp_001", 15, "8", 0)],
            ..Default::default()
        };

        let mut selection = select(&["emp_001"]);
        selection.organization = Some("plant_b".to_string());

        let run = calculator()
            .calculate(&store, &january(), &selection)
            .unwrap();

        assert_eq!(run.results.len(), 1);
    }

    // ==========================================================================
    // PC-008: error conditions
    // ==========================================================================
    #[test]
    fn test_pc_008_empty_selection_rejected() {
        let store = MemoryStore::default();
        let result = calculator().calculate(&store, &january(), &select(&[]));
        assert!(matches!(result, Err(PayrollError::EmptySelection)));
    }

    #[test]
    fn test_pc_008b_negative_hourly_rate_rejected() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "-1")],
            time_records: vec![record("emp_001", 15, "8", 0)],
            ..Default::default()
        };

        let result = calculator().calculate(&store, &january(), &select(&["emp_001"]));
        assert!(matches!(result, Err(PayrollError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_pc_008c_negative_hours_rejected() {
        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![record("emp_001", 15, "-2", 0)],
            ..Default::default()
        };

        let result = calculator().calculate(&store, &january(), &select(&["emp_001"]));
        assert!(matches!(
            result,
            Err(PayrollError::InvalidTimeRecord { .. })
        ));
    }

    // ==========================================================================
    // PC-009: per-row invariants hold across a mixed run
    // ==========================================================================
    #[test]
    fn test_pc_009_row_invariants() {
        let store = MemoryStore {
            employees: vec![
                employee("emp_001", EmployeeType::Casual, "50"),
                employee("emp_002", EmployeeType::Permanent, "62.50"),
            ],
            time_records: vec![
                record("emp_001", 12, "12.5", 25),
                record("emp_002", 12, "13", 7),
                record("emp_002", 13, "6", 0),
            ],
            loans: vec![EmployeeLoan {
                employee_id: "emp_002".to_string(),
                status: LoanStatus::Active,
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                outstanding_balance: dec("900"),
                monthly_payment: dec("150"),
            }],
            ..Default::default()
        };

        let run = calculator()
            .calculate(&store, &january(), &select(&["emp_001", "emp_002"]))
            .unwrap();

        assert_eq!(run.results.len(), 2);
        for row in &run.results {
            assert_eq!(row.gross_pay, row.regular_pay + row.overtime_pay);
            assert_eq!(
                row.other_deductions,
                row.lateness_penalty + row.loan_deductions
            );
            assert_eq!(
                row.net_pay,
                row.gross_pay - row.tax_deduction - row.other_deductions
            );
            assert!(row.regular_hours + row.overtime_hours > Decimal::ZERO);
        }
    }

    #[test]
    fn test_custom_overtime_threshold_from_policy() {
        let mut settings = PolicySettings::default();
        settings.overtime_threshold_hours = dec("10");

        let store = MemoryStore {
            employees: vec![employee("emp_001", EmployeeType::Casual, "50")],
            time_records: vec![record("emp_001", 15, "13", 0)],
            ..Default::default()
        };

        let run = PayrollCalculator::new(settings)
            .calculate(&store, &january(), &select(&["emp_001"]))
            .unwrap();

        let row = &run.results[0];
        assert_eq!(row.regular_hours, dec("10"));
        assert_eq!(row.overtime_hours, dec("2"));
    }
}
