//! Unpaid-break deduction rule.
//!
//! When an employee works more than the unpaid-break threshold, one hour
//! of break time is deducted from the raw clocked hours. Shifts that run
//! just past the nominal shift length are clamped so that minor clock-out
//! overruns do not inflate the paid hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours deducted when the unpaid-break rule applies.
pub const FULL_BREAK_DEDUCTION_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Width of the clamp window above the nominal shift length, in hours.
///
/// Raw hours strictly inside `(shift_hours, shift_hours + 0.75)` are
/// treated as a full shift with the break deducted, not as overtime.
pub const SHIFT_CLAMP_WINDOW_HOURS: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// The result of applying the unpaid-break rule to one employee's raw hours.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::apply_break_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let result = apply_break_deduction(dec("8"), dec("6"), dec("12"));
/// assert_eq!(result.effective_hours, dec("7"));
/// assert_eq!(result.deduction_hours, dec("1"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakDeductionResult {
    /// Worked hours after the deduction, the basis for the overtime split.
    pub effective_hours: Decimal,
    /// The deduction recorded on the result row: zero when no break was
    /// deducted, one full hour otherwise (including the clamp path).
    pub deduction_hours: Decimal,
}

/// Applies the unpaid-break rule to raw clocked hours.
///
/// The rule has three paths, checked in order:
/// 1. `raw_hours <= threshold`: no deduction, effective hours equal raw
///    hours.
/// 2. `shift_hours < raw_hours < shift_hours + 0.75`: the shift ran just
///    past its nominal length; effective hours are clamped to exactly
///    `shift_hours - 1` regardless of the precise raw value.
/// 3. Otherwise: subtract exactly one hour.
///
/// # Arguments
///
/// * `raw_hours` - Summed clocked hours for the period
/// * `threshold` - Hours above which an unpaid break is deducted
/// * `shift_hours` - Nominal full-shift length
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::apply_break_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
///
/// // Under the threshold: untouched.
/// assert_eq!(
///     apply_break_deduction(dec("5"), dec("6"), dec("12")).effective_hours,
///     dec("5")
/// );
///
/// // In the clamp window: a 12.5 hour clock-out pays 11 hours.
/// assert_eq!(
///     apply_break_deduction(dec("12.5"), dec("6"), dec("12")).effective_hours,
///     dec("11")
/// );
///
/// // Outside the window: plain one-hour deduction.
/// assert_eq!(
///     apply_break_deduction(dec("13"), dec("6"), dec("12")).effective_hours,
///     dec("12")
/// );
/// ```
pub fn apply_break_deduction(
    raw_hours: Decimal,
    threshold: Decimal,
    shift_hours: Decimal,
) -> BreakDeductionResult {
    if raw_hours <= threshold {
        return BreakDeductionResult {
            effective_hours: raw_hours,
            deduction_hours: Decimal::ZERO,
        };
    }

    let effective_hours = if raw_hours > shift_hours && raw_hours < shift_hours + SHIFT_CLAMP_WINDOW_HOURS
    {
        shift_hours - FULL_BREAK_DEDUCTION_HOURS
    } else {
        raw_hours - FULL_BREAK_DEDUCTION_HOURS
    };

    BreakDeductionResult {
        effective_hours,
        deduction_hours: FULL_BREAK_DEDUCTION_HOURS,
    }
}
