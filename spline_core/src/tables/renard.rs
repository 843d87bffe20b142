//! Renard preferred-number series (ISO 3).
//!
//! Used to round a computed measuring-pin size up to a standard gauge pin.

use serde::{Deserialize, Serialize};

const R5: [f64; 5] = [1.00, 1.60, 2.50, 4.00, 6.30];

const R10: [f64; 10] = [1.00, 1.25, 1.60, 2.00, 2.50, 3.15, 4.00, 5.00, 6.30, 8.00];

const R20: [f64; 20] = [
    1.00, 1.12, 1.25, 1.40, 1.60, 1.80, 2.00, 2.24, 2.50, 2.80, 3.15, 3.55, 4.00, 4.50, 5.00,
    5.60, 6.30, 7.10, 8.00, 9.00,
];

const R40: [f64; 40] = [
    1.00, 1.06, 1.12, 1.18, 1.25, 1.32, 1.40, 1.50, 1.60, 1.70, 1.80, 1.90, 2.00, 2.12, 2.24,
    2.36, 2.50, 2.65, 2.80, 3.00, 3.15, 3.35, 3.55, 3.75, 4.00, 4.25, 4.50, 4.75, 5.00, 5.30,
    5.60, 6.00, 6.30, 6.70, 7.10, 7.50, 8.00, 8.50, 9.00, 9.50,
];

/// Relative slack so a value computed as 1.7999999999 still selects 1.80
const RELATIVE_SLACK: f64 = 1e-9;

/// A Renard series, one decade of mantissas in [1, 10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredSeries {
    R5,
    R10,
    R20,
    R40,
}

impl PreferredSeries {
    /// Mantissas of one decade
    pub fn values(&self) -> &'static [f64] {
        match self {
            PreferredSeries::R5 => &R5,
            PreferredSeries::R10 => &R10,
            PreferredSeries::R20 => &R20,
            PreferredSeries::R40 => &R40,
        }
    }
}

/// Smallest member of `series` (over all decades) that is ≥ `value`.
///
/// Returns `None` for non-positive or non-finite input.
///
/// # Example
/// ```rust
/// use spline_core::tables::renard::{find_greater_than_or_equal, PreferredSeries};
///
/// assert_eq!(find_greater_than_or_equal(PreferredSeries::R40, 1.83), Some(1.9));
/// let small = find_greater_than_or_equal(PreferredSeries::R40, 0.0412).unwrap();
/// assert!((small - 0.0425).abs() < 1e-12);
/// ```
pub fn find_greater_than_or_equal(series: PreferredSeries, value: f64) -> Option<f64> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let exponent = value.log10().floor() as i32;
    let decade = 10f64.powi(exponent);
    let threshold = value * (1.0 - RELATIVE_SLACK);

    let found = series
        .values()
        .iter()
        .map(|mantissa| mantissa * decade)
        .find(|candidate| *candidate >= threshold)
        .unwrap_or(10.0 * decade);
    Some(found)
}
