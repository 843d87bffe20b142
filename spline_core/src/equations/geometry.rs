//! # Spline Geometry Relations
//!
//! Relations shared by the ISO and ANSI engines: form diameter, measuring
//! pin size and the measurement over (external) or between (internal) pins.
//!
//! ## Notation
//!
//! - `D` = Pitch diameter
//! - `Db` = Base diameter
//! - `α` = Pressure angle at the pitch diameter
//! - `z` = Number of teeth
//! - `dp` = Measuring pin diameter
//! - `es` = Fundamental deviation (external tooth thickness)
//! - `hs` = Addendum-side form height
//!
//! ## References
//!
//! - ISO 4156-1:2005, clauses 5 and 10
//! - ANSI B92.1, measurement with pins

use super::involute::{involute, inverse_involute, sevolute};
use crate::designation::SplineKind;

/// Maximum form diameter of the external spline (chord/sagitta construction).
///
/// # Formula
/// ```text
/// DFe = 2·√[(Db/2)² + (D/2·sin α − (hs − es/(2·tan α)) / sin α)²]
/// ```
///
/// # Example
/// ```rust
/// use spline_core::equations::geometry::form_diameter;
///
/// // z = 25, m = 1, α = 30°, es = 0
/// let dfe = form_diameter(25.0, 21.650635, 30.0, 0.6, 0.0);
/// assert!((dfe - 23.89).abs() < 0.005);
/// ```
pub fn form_diameter(
    pitch_diameter: f64,
    base_diameter: f64,
    pressure_angle_deg: f64,
    hs: f64,
    fundamental_deviation: f64,
) -> f64 {
    let alpha = pressure_angle_deg.to_radians();
    let (sin_a, tan_a) = (alpha.sin(), alpha.tan());
    let radial = 0.5 * pitch_diameter * sin_a - (hs - 0.5 * fundamental_deviation / tan_a) / sin_a;
    2.0 * ((0.5 * base_diameter).powi(2) + radial.powi(2)).sqrt()
}

/// Unrounded pin diameter that touches the external flank at the pitch circle.
///
/// # Formulas
/// ```text
/// DEe = pb − (s·cos α + Db·inv α)
/// BA  = Db·tan α / 2
/// BOe = Db·tan(α + inv α + DEe/Db) / 2
/// dp  = 2·(BOe − BA)
/// ```
pub fn external_pin_size(
    base_pitch: f64,
    basic_thickness: f64,
    base_diameter: f64,
    pressure_angle_deg: f64,
) -> f64 {
    let alpha = pressure_angle_deg.to_radians();
    let inv = involute(pressure_angle_deg);
    let de = base_pitch - (basic_thickness * alpha.cos() + base_diameter * inv);
    let ba = base_diameter * alpha.tan() / 2.0;
    let bo = base_diameter * (alpha + inv + de / base_diameter).tan() / 2.0;
    2.0 * (bo - ba)
}

/// Unrounded pin diameter that touches the internal flank at the pitch circle.
///
/// # Formulas
/// ```text
/// DEi = e·cos α + Db·inv α
/// BOi = Db·tan(α + inv α − DEi/Db) / 2
/// dp  = 2·(BA − BOi)
/// ```
pub fn internal_pin_size(
    basic_space_width: f64,
    base_diameter: f64,
    pressure_angle_deg: f64,
) -> f64 {
    let alpha = pressure_angle_deg.to_radians();
    let inv = involute(pressure_angle_deg);
    let de = basic_space_width * alpha.cos() + base_diameter * inv;
    let ba = base_diameter * alpha.tan() / 2.0;
    let bo = base_diameter * (alpha + inv - de / base_diameter).tan() / 2.0;
    2.0 * (ba - bo)
}

/// Fixed inputs of a pin measurement for one spline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinMeasurement {
    pub kind: SplineKind,
    pub teeth: u32,
    pub pitch_diameter: f64,
    pub base_diameter: f64,
    pub pressure_angle_deg: f64,
    pub pin_diameter: f64,
}

impl PinMeasurement {
    /// Pressure angle (radians) at the pin center for a given actual
    /// tooth thickness (external) or space width (internal).
    ///
    /// # Formulas
    /// ```text
    /// external: inv φ = s/D + inv α + dp/Db − π/z
    /// internal: inv φ = e/D + inv α − dp/Db
    /// ```
    pub fn pin_center_angle(&self, actual: f64) -> f64 {
        let pin_term = self.pin_diameter / self.base_diameter;
        let base = actual / self.pitch_diameter + involute(self.pressure_angle_deg);
        let inv_phi = match self.kind {
            SplineKind::External => base + pin_term - std::f64::consts::PI / self.teeth as f64,
            SplineKind::Internal => base - pin_term,
        };
        inverse_involute(inv_phi)
    }

    /// Measurement over pins (external) or between pins (internal).
    ///
    /// The pin center sits on the diameter `Db·sec φ = Db·(sev φ + inv φ)`.
    /// With an odd tooth count the two pins are not diametrically opposite
    /// and the chord is shortened by `cos(90°/z)`.
    ///
    /// # Formulas
    /// ```text
    /// even z: M = Db·sec φ ± dp
    /// odd z:  M = Db·cos(90°/z)·sec φ ± dp
    /// ```
    pub fn measure(&self, actual: f64) -> f64 {
        let phi_deg = self.pin_center_angle(actual).to_degrees();
        let mut center = self.base_diameter * (sevolute(phi_deg) + involute(phi_deg));
        if self.teeth % 2 == 1 {
            center *= (90.0 / self.teeth as f64).to_radians().cos();
        }
        match self.kind {
            SplineKind::External => center + self.pin_diameter,
            SplineKind::Internal => center - self.pin_diameter,
        }
    }
}
