//! # Involute Functions
//!
//! The three tooth-profile functions shared by every standard. All angles
//! are converted to radians exactly once, at the top of each function.
//!
//! ## Notation
//!
//! - `α` = Pressure angle (degrees at the API boundary)
//! - `inv α` = tan α − α
//! - `sev α` = sec α − inv α
//!
//! ## References
//!
//! - ISO 4156-1:2005, Annex for measurement over pins
//! - ANSI B92.1, Section 7 (pin measurement)

/// Involute function of an angle given in degrees.
///
/// # Formula
/// inv α = tan α − α   (α in radians)
///
/// # Example
/// ```rust
/// use spline_core::equations::involute::involute;
///
/// // inv 30° = 0.0537515
/// assert!((involute(30.0) - 0.053751).abs() < 1e-6);
/// ```
#[inline]
pub fn involute(angle_deg: f64) -> f64 {
    let alpha = angle_deg.to_radians();
    alpha.tan() - alpha
}

/// Inverse involute, returning the angle in radians.
///
/// This is the closed-form rational approximation used by the pin
/// measurement tables of the standards, not an exact numerical inverse.
///
/// # Formula
/// α ≈ x^(1/3) / (0.693357 + 0.192484·x^(2/3))
///
/// # Example
/// ```rust
/// use spline_core::equations::involute::{involute, inverse_involute};
///
/// let alpha = inverse_involute(involute(30.0));
/// assert!((alpha.to_degrees() - 30.0).abs() < 0.01);
/// ```
#[inline]
pub fn inverse_involute(x: f64) -> f64 {
    let cube_root = x.cbrt();
    cube_root / (0.693357 + 0.192484 * cube_root * cube_root)
}

/// Sevolute function of an angle given in degrees.
///
/// The radial distance of a point on the involute, divided by the base
/// radius, is `sev α + inv α = sec α`.
///
/// # Formula
/// sev α = 1/cos α − inv α
#[inline]
pub fn sevolute(angle_deg: f64) -> f64 {
    1.0 / angle_deg.to_radians().cos() - involute(angle_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_involute_zero() {
        assert_eq!(involute(0.0), 0.0);
    }

    #[test]
    fn test_involute_standard_angles() {
        assert!((involute(30.0) - 0.053_751_5).abs() < 1e-7);
        assert!((involute(37.5) - 0.112_828_5).abs() < 1e-6);
        assert!((involute(45.0) - 0.214_602).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_involute_approximation() {
        for angle in [20.0, 30.0, 37.5, 45.0] {
            let back = inverse_involute(involute(angle)).to_degrees();
            assert!((back - angle).abs() < 0.01, "angle {} came back as {}", angle, back);
        }
    }

    #[test]
    fn test_inverse_involute_is_the_rational_form() {
        let x: f64 = 0.08;
        let expected = x.powf(1.0 / 3.0) / (0.693357 + 0.192484 * x.powf(2.0 / 3.0));
        assert!((inverse_involute(x) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sevolute_identity() {
        let alpha: f64 = 37.5;
        let secant = 1.0 / alpha.to_radians().cos();
        assert!((sevolute(alpha) + involute(alpha) - secant).abs() < 1e-12);
    }
}
