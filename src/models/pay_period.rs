//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the window
//! over which time records are aggregated for one payroll run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pay period with an inclusive date range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn january() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        assert!(january().contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    }

    #[test]
    fn test_contains_date_on_start_date() {
        let period = january();
        assert!(period.contains_date(period.start_date));
    }

    #[test]
    fn test_contains_date_on_end_date() {
        let period = january();
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_before_start() {
        assert!(!january().contains_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
    }

    #[test]
    fn test_contains_date_after_end() {
        assert!(!january().contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    }

    #[test]
    fn test_serialize_pay_period() {
        let json = serde_json::to_string(&january()).unwrap();
        assert!(json.contains("\"start_date\":\"2026-01-01\""));
        assert!(json.contains("\"end_date\":\"2026-01-31\""));
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{"start_date": "2026-01-01", "end_date": "2026-01-31"}"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, january());
    }
}
