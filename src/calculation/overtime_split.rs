//! Regular/overtime split.
//!
//! Effective hours are split at the policy overtime threshold: hours up to
//! the threshold are paid at the base rate, hours beyond it at time and a
//! half. The threshold is applied to the whole period as supplied, without
//! pro-rating for periods shorter or longer than a week; that matches the
//! source system and is why the threshold lives in policy settings rather
//! than in code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the base rate for overtime hours.
pub const OVERTIME_PAY_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The split of effective hours into regular and overtime portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours paid at the base rate (capped at the threshold).
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate (excess over the threshold).
    pub overtime_hours: Decimal,
}

/// Splits effective hours at the overtime threshold.
///
/// For all non-negative inputs, `regular_hours + overtime_hours` equals
/// the effective hours supplied.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
///
/// let split = split_overtime(dec("45"), dec("40"));
/// assert_eq!(split.regular_hours, dec("40"));
/// assert_eq!(split.overtime_hours, dec("5"));
///
/// let split = split_overtime(dec("12"), dec("40"));
/// assert_eq!(split.regular_hours, dec("12"));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_overtime(effective_hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    if effective_hours <= threshold {
        OvertimeSplit {
            regular_hours: effective_hours,
            overtime_hours: Decimal::ZERO,
        }
    } else {
        OvertimeSplit {
            regular_hours: threshold,
            overtime_hours: effective_hours - threshold,
        }
    }
}
