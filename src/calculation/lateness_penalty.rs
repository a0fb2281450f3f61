//! Lateness penalty banding.
//!
//! Cumulative late minutes are charged per full 10-minute band at a rate
//! that depends on employment category. Partial bands are not penalized.

use rust_decimal::Decimal;

/// Width of a lateness band, in minutes.
pub const LATENESS_BAND_MINUTES: u32 = 10;

/// Calculates the lateness penalty for cumulative late minutes.
///
/// The penalty is `floor(total_late_minutes / 10) * rate`, so 25 late
/// minutes at rate 10 is charged two full bands (20), not 25. The result
/// is monotonic non-decreasing in `total_late_minutes` and constant within
/// each band.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::lateness_penalty;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Decimal::from_str("10").unwrap();
/// assert_eq!(lateness_penalty(25, rate), Decimal::from_str("20").unwrap());
/// assert_eq!(lateness_penalty(9, rate), Decimal::ZERO);
/// ```
pub fn lateness_penalty(total_late_minutes: u32, rate: Decimal) -> Decimal {
    Decimal::from(total_late_minutes / LATENESS_BAND_MINUTES) * rate
}
