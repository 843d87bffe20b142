//! # ISO 4156 Derivation
//!
//! Straight-line pipeline from an [`IsoSpecification`] to the drawing
//! dimensions of one member (mm).
//!
//! ## Tolerance Factors
//!
//! ```text
//! i_D = 0.45·∛D + 0.001·D        (D ≤ 500)
//! i_D = 0.004·D + 2.1            (D > 500)
//! i_E = 0.45·∛s + 0.001·s        (s = π·m/2)
//! ```
//!
//! ## Grade Formula Sets (µm)
//!
//! | Grade | T             | F_p              | f_f             | F_β          |
//! |-------|---------------|------------------|-----------------|--------------|
//! | 4     | 10 i_D + 40 i_E  | 2.5 √L + 6.3  | 1.6 φ_f + 10    | 0.8 √g + 4   |
//! | 5     | 16 i_D + 64 i_E  | 3.55 √L + 9   | 2.5 φ_f + 16    | 1.0 √g + 5   |
//! | 6     | 25 i_D + 100 i_E | 5 √L + 12.5   | 4 φ_f + 25      | 1.25 √g + 6.3|
//! | 7     | 40 i_D + 160 i_E | 7.1 √L + 18   | 6.3 φ_f + 40    | 2 √g + 10    |
//!
//! with `L = π·m·z/2`, `φ_f = m + 0.0125·m·z` and `g` the reference length.
//! The deviation allowance is `λ = 0.6·√(F_p² + f_f² + F_β²)`.
//!
//! ## Profile Rows
//!
//! Major/minor diameter constants per pressure angle and root, in multiples
//! of the module:
//!
//! | α    | Root   | h_s  | ext major | ext minor | int major | root radius |
//! |------|--------|------|-----------|-----------|-----------|-------------|
//! | 30   | flat   | 0.6  | z + 1     | z − 1.5   | z + 1.5   | 0.2         |
//! | 30   | fillet | 0.6  | z + 1     | z − 1.8   | z + 1.8   | 0.4         |
//! | 37.5 | any    | 0.55 | z + 0.9   | z − 1.4   | z + 1.4   | 0.3         |
//! | 45   | any    | 0.5  | z + 0.8   | z − 1.2   | z + 1.2   | 0.25        |

use std::f64::consts::PI;

use tracing::debug;

use super::results::{
    pin_measurements, ExternalDimensions, InternalDimensions, SizeParameter, SplineDimensions,
    SplineGeometry, ToothSizeBounds,
};
use crate::designation::{IsoSpecification, RootType, SplineKind, Standard};
use crate::equations::geometry::{external_pin_size, form_diameter, internal_pin_size};
use crate::errors::{SplineError, SplineResult};
use crate::tables::iso::check_pitch_diameter;
use crate::tables::{find_greater_than_or_equal, FundamentalDeviations, PreferredSeries};
use crate::units::Millimeters;

const STANDARD: &str = "ISO 4156";

/// Per-grade coefficients: T = (i_D, i_E) factors, then (a, b) pairs for
/// the pitch, profile and helix deviations
#[derive(Debug, Clone, Copy)]
struct GradeFormulas {
    grade: u8,
    total_tolerance: (f64, f64),
    pitch: (f64, f64),
    profile: (f64, f64),
    helix: (f64, f64),
}

const GRADES: [GradeFormulas; 4] = [
    GradeFormulas {
        grade: 4,
        total_tolerance: (10.0, 40.0),
        pitch: (2.5, 6.3),
        profile: (1.6, 10.0),
        helix: (0.8, 4.0),
    },
    GradeFormulas {
        grade: 5,
        total_tolerance: (16.0, 64.0),
        pitch: (3.55, 9.0),
        profile: (2.5, 16.0),
        helix: (1.0, 5.0),
    },
    GradeFormulas {
        grade: 6,
        total_tolerance: (25.0, 100.0),
        pitch: (5.0, 12.5),
        profile: (4.0, 25.0),
        helix: (1.25, 6.3),
    },
    GradeFormulas {
        grade: 7,
        total_tolerance: (40.0, 160.0),
        pitch: (7.1, 18.0),
        profile: (6.3, 40.0),
        helix: (2.0, 10.0),
    },
];

/// Diameter constants for one pressure angle (and root at 30°)
#[derive(Debug, Clone, Copy)]
struct IsoProfile {
    pressure_angle_deg: f64,
    /// `None` matches any root
    root: Option<RootType>,
    hs: f64,
    external_major: f64,
    external_minor: f64,
    internal_major: f64,
    root_radius: f64,
}

const PROFILES: [IsoProfile; 4] = [
    IsoProfile {
        pressure_angle_deg: 30.0,
        root: Some(RootType::Flat),
        hs: 0.6,
        external_major: 1.0,
        external_minor: 1.5,
        internal_major: 1.5,
        root_radius: 0.2,
    },
    IsoProfile {
        pressure_angle_deg: 30.0,
        root: Some(RootType::Fillet),
        hs: 0.6,
        external_major: 1.0,
        external_minor: 1.8,
        internal_major: 1.8,
        root_radius: 0.4,
    },
    IsoProfile {
        pressure_angle_deg: 37.5,
        root: None,
        hs: 0.55,
        external_major: 0.9,
        external_minor: 1.4,
        internal_major: 1.4,
        root_radius: 0.3,
    },
    IsoProfile {
        pressure_angle_deg: 45.0,
        root: None,
        hs: 0.5,
        external_major: 0.8,
        external_minor: 1.2,
        internal_major: 1.2,
        root_radius: 0.25,
    },
];

fn grade_formulas(grade: u8) -> SplineResult<&'static GradeFormulas> {
    GRADES
        .iter()
        .find(|formulas| formulas.grade == grade)
        .ok_or_else(|| SplineError::unsupported_grade(STANDARD, grade))
}

fn profile(pressure_angle_deg: f64, root: RootType) -> SplineResult<&'static IsoProfile> {
    PROFILES
        .iter()
        .find(|row| {
            (row.pressure_angle_deg - pressure_angle_deg).abs() < 1e-9
                && row.root.map_or(true, |row_root| row_root == root)
        })
        .ok_or_else(|| SplineError::unsupported_pressure_angle(STANDARD, pressure_angle_deg))
}

/// Diameter tolerance unit i_D (µm)
fn diameter_factor(pitch_diameter: f64) -> f64 {
    if pitch_diameter <= 500.0 {
        0.45 * pitch_diameter.cbrt() + 0.001 * pitch_diameter
    } else {
        0.004 * pitch_diameter + 2.1
    }
}

/// Tolerances of one grade, µm
#[derive(Debug, Clone, Copy)]
struct GradeTolerances {
    total_space_width: f64,
    total_diameter: f64,
    deviation_allowance: f64,
}

fn grade_tolerances(spec: &IsoSpecification, formulas: &GradeFormulas) -> GradeTolerances {
    let module = spec.module.value();
    let teeth = spec.teeth as f64;
    let i_d = diameter_factor(spec.pitch_diameter());
    let basic = 0.5 * PI * module;
    let i_e = 0.45 * basic.cbrt() + 0.001 * basic;

    let arc_length = PI * module * teeth / 2.0;
    let form_factor = module + 0.0125 * module * teeth;
    let linear = |(a, b): (f64, f64), x: f64| a * x + b;

    let pitch_deviation = linear(formulas.pitch, arc_length.sqrt());
    let profile_deviation = linear(formulas.profile, form_factor);
    let helix_deviation = linear(formulas.helix, spec.reference_length().sqrt());

    GradeTolerances {
        total_space_width: formulas.total_tolerance.0 * i_d + formulas.total_tolerance.1 * i_e,
        total_diameter: 40.0 * i_d + 160.0 * i_e,
        deviation_allowance: 0.6
            * (pitch_deviation.powi(2) + profile_deviation.powi(2) + helix_deviation.powi(2))
                .sqrt(),
    }
}

/// An explicit reference length must be a positive, finite length.
fn check_reference_length(spec: &IsoSpecification) -> SplineResult<()> {
    match spec.reference_length.map(Millimeters::value) {
        Some(length) if !length.is_finite() || length <= 0.0 => Err(SplineError::invalid_input(
            "reference_length",
            length.to_string(),
            "Reference length must be positive and finite",
        )),
        _ => Ok(()),
    }
}

/// Derive all dimensions for an ISO 4156 specification.
///
/// Validation (pitch diameter, reference length, grade and pressure angle)
/// happens before any table is consulted, so a rejected spline never touches
/// the deviation cache.
pub fn calculate(
    spec: &IsoSpecification,
    deviations: &FundamentalDeviations,
) -> SplineResult<SplineDimensions> {
    let pitch_diameter = spec.pitch_diameter();
    check_pitch_diameter(pitch_diameter)?;
    check_reference_length(spec)?;
    let formulas = grade_formulas(spec.grade)?;
    // a bare angle means flat root
    let row = profile(spec.pressure_angle_deg, spec.root.unwrap_or(RootType::Flat))?;

    let module = spec.module.value();
    let teeth = spec.teeth as f64;
    let alpha = spec.pressure_angle_deg.to_radians();
    let tan_a = alpha.tan();

    let geometry = SplineGeometry {
        standard: Standard::Iso4156,
        unit: Standard::Iso4156.length_unit(),
        teeth: spec.teeth,
        pressure_angle_deg: spec.pressure_angle_deg,
        size: SizeParameter::Module { module },
        pitch_diameter,
        base_diameter: pitch_diameter * alpha.cos(),
        circular_pitch: PI * module,
        base_pitch: PI * module * alpha.cos(),
    };
    let basic = 0.5 * PI * module;

    let tolerances = grade_tolerances(spec, formulas);
    debug!(
        grade = spec.grade,
        total_space_width_um = tolerances.total_space_width,
        total_diameter_um = tolerances.total_diameter,
        deviation_allowance_um = tolerances.deviation_allowance,
        "ISO grade tolerances"
    );

    let deviation_um = deviations.lookup(pitch_diameter, &spec.fit, tolerances.total_space_width)?;
    let es = f64::from(deviation_um) * 1e-3;
    let total = tolerances.total_space_width * 1e-3;
    let variation = tolerances.deviation_allowance * 1e-3;
    let diameter_tolerance = tolerances.total_diameter * 1e-3 / tan_a;

    let max_form = form_diameter(
        pitch_diameter,
        geometry.base_diameter,
        spec.pressure_angle_deg,
        row.hs * module,
        es,
    );
    let root_radius = row.root_radius * module;

    let dimensions = match spec.kind {
        SplineKind::External => {
            // js and k only shift the flanks
            let major_deviation = if spec.fit.is_tolerance_derived() { 0.0 } else { es };
            let max_minor = module * (teeth - row.external_minor) + es / tan_a;
            let thickness = ToothSizeBounds::external(basic + es, total, variation);
            let pin = preferred_pin(external_pin_size(
                geometry.base_pitch,
                basic,
                geometry.base_diameter,
                spec.pressure_angle_deg,
            ))?;
            let (max_pins, min_pins) =
                pin_measurements(&geometry, SplineKind::External, pin, &thickness);

            SplineDimensions::External(ExternalDimensions {
                max_major_diameter: module * (teeth + row.external_major) + major_deviation / tan_a,
                min_major_diameter: None,
                max_form_diameter: max_form,
                max_minor_diameter: max_minor,
                min_minor_diameter: max_minor - diameter_tolerance,
                max_effective_thickness: thickness.max_effective,
                max_actual_thickness: thickness.max_actual,
                min_effective_thickness: thickness.min_effective,
                min_actual_thickness: thickness.min_actual,
                max_measurement_over_pins: max_pins,
                min_measurement_over_pins: min_pins,
                pin_diameter: pin,
                root_radius,
                geometry,
            })
        }
        SplineKind::Internal => {
            let form_clearance = 0.1 * module;
            let min_major = module * (teeth + row.internal_major);
            let width = ToothSizeBounds::internal(basic, total, variation);
            let pin = preferred_pin(internal_pin_size(
                basic,
                geometry.base_diameter,
                spec.pressure_angle_deg,
            ))?;
            let (max_pins, min_pins) =
                pin_measurements(&geometry, SplineKind::Internal, pin, &width);

            SplineDimensions::Internal(InternalDimensions {
                min_major_diameter: min_major,
                max_major_diameter: min_major + diameter_tolerance,
                // mating external major addend per angle, not a fixed z + 1
                min_form_diameter: module * (teeth + row.external_major) + 2.0 * form_clearance,
                min_minor_diameter: max_form + 2.0 * form_clearance,
                max_minor_diameter: None,
                max_actual_width: width.max_actual,
                max_effective_width: width.max_effective,
                min_actual_width: width.min_actual,
                min_effective_width: width.min_effective,
                max_measurement_between_pins: max_pins,
                min_measurement_between_pins: min_pins,
                pin_diameter: pin,
                root_radius,
                geometry,
            })
        }
    };

    Ok(dimensions)
}

/// Round a raw pin size up to the R40 series
fn preferred_pin(raw: f64) -> SplineResult<f64> {
    find_greater_than_or_equal(PreferredSeries::R40, raw)
        .ok_or_else(|| SplineError::out_of_range("pin_diameter", raw, "positive"))
}
