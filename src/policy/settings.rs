//! Typed policy settings and their defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};

/// A single row of the policy settings table.
///
/// The backing store holds settings as `(key, value)` pairs where the
/// value is a string-encoded number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRow {
    /// The setting key (e.g. "shift_hours").
    pub key: String,
    /// The string-encoded numeric value.
    pub value: String,
}

/// The effective pay-policy parameters for a payroll run.
///
/// One set is effective per calculation. Every field falls back to a fixed
/// default when its key is absent from the backing store; unknown keys are
/// ignored. A value that fails to parse is a configuration error, not a
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    /// Nominal lunch break length in minutes. Informational; not used in
    /// the monetary calculation.
    pub lunch_break_minutes: Decimal,
    /// Nominal full-shift length in hours.
    pub shift_hours: Decimal,
    /// Hours worked above which an unpaid break is deducted.
    pub unpaid_break_threshold_hours: Decimal,
    /// Currency penalty per 10 late-minutes for casual staff.
    pub casual_lateness_penalty_rate: Decimal,
    /// Currency penalty per 10 late-minutes for permanent staff.
    pub permanent_lateness_penalty_rate: Decimal,
    /// Hours above which effective hours are paid at the overtime rate.
    ///
    /// The source system hard-coded a weekly 40 here and applied it to the
    /// whole period regardless of period length; that behavior is kept,
    /// but the threshold is a policy parameter so it can be corrected
    /// without a code change.
    pub overtime_threshold_hours: Decimal,
}

/// Default nominal lunch break, in minutes.
pub const DEFAULT_LUNCH_BREAK_MINUTES: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Default nominal full-shift length, in hours.
pub const DEFAULT_SHIFT_HOURS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Default unpaid-break threshold, in hours.
pub const DEFAULT_UNPAID_BREAK_THRESHOLD_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Default casual lateness penalty rate, per 10 late-minutes.
pub const DEFAULT_CASUAL_LATENESS_PENALTY_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Default permanent lateness penalty rate, per 10 late-minutes.
pub const DEFAULT_PERMANENT_LATENESS_PENALTY_RATE: Decimal =
    Decimal::from_parts(20, 0, 0, false, 0);

/// Default overtime threshold, in hours.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            lunch_break_minutes: DEFAULT_LUNCH_BREAK_MINUTES,
            shift_hours: DEFAULT_SHIFT_HOURS,
            unpaid_break_threshold_hours: DEFAULT_UNPAID_BREAK_THRESHOLD_HOURS,
            casual_lateness_penalty_rate: DEFAULT_CASUAL_LATENESS_PENALTY_RATE,
            permanent_lateness_penalty_rate: DEFAULT_PERMANENT_LATENESS_PENALTY_RATE,
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
        }
    }
}

impl PolicySettings {
    /// Builds settings from the flat key/value table.
    ///
    /// Missing keys fall back to the defaults, unknown keys are ignored,
    /// and a value that cannot be parsed as a number is reported as a
    /// [`PayrollError::SettingParseError`].
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::policy::{PolicySettings, SettingRow};
    ///
    /// let rows = vec![SettingRow {
    ///     key: "shift_hours".to_string(),
    ///     value: "10".to_string(),
    /// }];
    /// let settings = PolicySettings::from_rows(&rows).unwrap();
    /// assert_eq!(settings.shift_hours.to_string(), "10");
    /// // Missing keys keep their defaults.
    /// assert_eq!(settings.lunch_break_minutes.to_string(), "60");
    /// ```
    pub fn from_rows(rows: &[SettingRow]) -> PayrollResult<Self> {
        let mut settings = Self::default();

        for row in rows {
            let target = match row.key.as_str() {
                "lunch_break_minutes" => &mut settings.lunch_break_minutes,
                "shift_hours" => &mut settings.shift_hours,
                "unpaid_break_threshold_hours" => &mut settings.unpaid_break_threshold_hours,
                "casual_lateness_penalty_rate" => &mut settings.casual_lateness_penalty_rate,
                "permanent_lateness_penalty_rate" => {
                    &mut settings.permanent_lateness_penalty_rate
                }
                "overtime_threshold_hours" => &mut settings.overtime_threshold_hours,
                _ => continue,
            };

            *target = Decimal::from_str(row.value.trim()).map_err(|_| {
                PayrollError::SettingParseError {
                    key: row.key.clone(),
                    value: row.value.clone(),
                }
            })?;
        }

        Ok(settings)
    }
}
