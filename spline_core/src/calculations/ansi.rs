//! # ANSI B92.1 Derivation
//!
//! Inch-series involute splines keyed by diametral pitch P. Every diameter
//! constant below is in units of 1/P.
//!
//! ## Profile Rows
//!
//! | φ    | Root   | Fit  | h_s  | ext major | ext minor | int major | int form | root radius | pin   |
//! |------|--------|------|------|-----------|-----------|-----------|----------|-------------|-------|
//! | 30   | flat   | side | 0.6  | N + 1     | N − 1.35  | N + 1.35  | N + 1    | 0.2         | 1.728 |
//! | 30   | fillet | side | 0.6  | N + 1     | N − 1.8   | N + 1.8   | N + 1    | 0.4         | 1.728 |
//! | 30   | flat   | dia  | 0.6  | N + 1     | N − 1.35  | N + 1     | N + 0.8  | 0.2         | 1.728 |
//! | 37.5 | any    | side | 0.55 | N + 0.9   | N − 1.4   | N + 1.4   | N + 0.9  | 0.3         | 1.728 |
//! | 45   | any    | side | 0.5  | N + 0.8   | N − 1.2   | N + 1.2   | N + 0.8  | 0.25        | 1.920 |
//!
//! The internal form diameter adds `2·c_F`, with the form clearance
//! `c_F = 0.001·D` clamped to `[0.001, 0.010]` in. Effective clearance is
//! zero for both fits, so the external maximum effective thickness equals
//! the basic circular thickness `π/(2P)`.

use std::f64::consts::PI;

use tracing::debug;

use super::results::{
    pin_measurements, ExternalDimensions, InternalDimensions, SizeParameter, SplineDimensions,
    SplineGeometry, ToothSizeBounds,
};
use crate::designation::{AnsiSpecification, FitType, RootType, SplineKind, Standard};
use crate::equations::geometry::form_diameter;
use crate::errors::{SplineError, SplineResult};
use crate::tables::ansi::{diameter_tolerances, space_width_tolerance};

const STANDARD: &str = "ANSI B92.1";

#[derive(Debug, Clone, Copy)]
struct AnsiProfile {
    pressure_angle_deg: f64,
    /// `None` matches any root
    root: Option<RootType>,
    fit: FitType,
    hs: f64,
    external_major: f64,
    external_minor: f64,
    internal_major: f64,
    internal_form: f64,
    root_radius: f64,
    pin: f64,
}

const PROFILES: [AnsiProfile; 5] = [
    AnsiProfile {
        pressure_angle_deg: 30.0,
        root: Some(RootType::Flat),
        fit: FitType::Side,
        hs: 0.6,
        external_major: 1.0,
        external_minor: -1.35,
        internal_major: 1.35,
        internal_form: 1.0,
        root_radius: 0.2,
        pin: 1.7280,
    },
    AnsiProfile {
        pressure_angle_deg: 30.0,
        root: Some(RootType::Fillet),
        fit: FitType::Side,
        hs: 0.6,
        external_major: 1.0,
        external_minor: -1.8,
        internal_major: 1.8,
        internal_form: 1.0,
        root_radius: 0.4,
        pin: 1.7280,
    },
    AnsiProfile {
        pressure_angle_deg: 30.0,
        root: Some(RootType::Flat),
        fit: FitType::Diameter,
        hs: 0.6,
        external_major: 1.0,
        external_minor: -1.35,
        internal_major: 1.0,
        internal_form: 0.8,
        root_radius: 0.2,
        pin: 1.7280,
    },
    AnsiProfile {
        pressure_angle_deg: 37.5,
        root: None,
        fit: FitType::Side,
        hs: 0.55,
        external_major: 0.9,
        external_minor: -1.4,
        internal_major: 1.4,
        internal_form: 0.9,
        root_radius: 0.3,
        pin: 1.7280,
    },
    AnsiProfile {
        pressure_angle_deg: 45.0,
        root: None,
        fit: FitType::Side,
        hs: 0.5,
        external_major: 0.8,
        external_minor: -1.2,
        internal_major: 1.2,
        internal_form: 0.8,
        root_radius: 0.25,
        pin: 1.9200,
    },
];

fn profile(spec: &AnsiSpecification) -> SplineResult<&'static AnsiProfile> {
    let mut rows = PROFILES
        .iter()
        .filter(|row| (row.pressure_angle_deg - spec.pressure_angle_deg).abs() < 1e-9)
        .peekable();
    if rows.peek().is_none() {
        return Err(SplineError::unsupported_pressure_angle(STANDARD, spec.pressure_angle_deg));
    }
    rows.find(|row| row.fit == spec.fit && row.root.map_or(true, |root| root == spec.root))
        .ok_or_else(|| {
            SplineError::unsupported_fit(
                STANDARD,
                format!(
                    "{} fit with {:?} root at {} deg",
                    spec.fit.code(),
                    spec.root,
                    spec.pressure_angle_deg
                ),
            )
        })
}

/// Form clearance c_F (in)
fn form_clearance(pitch_diameter: f64) -> f64 {
    (0.001 * pitch_diameter).clamp(0.001, 0.010)
}

/// Derive all dimensions for an ANSI B92.1 specification.
pub fn calculate(spec: &AnsiSpecification) -> SplineResult<SplineDimensions> {
    let row = profile(spec)?;
    let tolerance = space_width_tolerance(spec.diametral_pitch, spec.teeth, spec.class)?;
    let (major_tolerance, minor_tolerance) = diameter_tolerances(spec.diametral_pitch, spec.class)?;

    let pitch = spec.diametral_pitch;
    let teeth = spec.teeth as f64;
    let phi = spec.pressure_angle_deg.to_radians();
    let pitch_diameter = spec.pitch_diameter();

    let geometry = SplineGeometry {
        standard: Standard::AnsiB92,
        unit: Standard::AnsiB92.length_unit(),
        teeth: spec.teeth,
        pressure_angle_deg: spec.pressure_angle_deg,
        size: SizeParameter::DiametralPitch {
            pitch,
            stub_pitch: spec.stub_pitch(),
        },
        pitch_diameter,
        base_diameter: pitch_diameter * phi.cos(),
        circular_pitch: PI / pitch,
        base_pitch: PI / pitch * phi.cos(),
    };
    let basic = PI / (2.0 * pitch);
    let clearance = form_clearance(pitch_diameter);
    let max_form = form_diameter(
        pitch_diameter,
        geometry.base_diameter,
        spec.pressure_angle_deg,
        row.hs / pitch,
        0.0,
    );
    let pin = row.pin / pitch;
    let root_radius = row.root_radius / pitch;

    debug!(
        class = spec.class,
        machining = tolerance.machining,
        variation = tolerance.variation,
        major_tolerance,
        minor_tolerance,
        "ANSI tolerances"
    );

    let dimensions = match spec.kind {
        SplineKind::External => {
            let max_major = (teeth + row.external_major) / pitch;
            let max_minor = (teeth + row.external_minor) / pitch;
            let thickness =
                ToothSizeBounds::external(basic, tolerance.total(), tolerance.variation);
            let (max_pins, min_pins) =
                pin_measurements(&geometry, SplineKind::External, pin, &thickness);

            SplineDimensions::External(ExternalDimensions {
                max_major_diameter: max_major,
                min_major_diameter: Some(max_major - major_tolerance),
                max_form_diameter: max_form,
                max_minor_diameter: max_minor,
                min_minor_diameter: max_minor - minor_tolerance,
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
            let min_major = (teeth + row.internal_major) / pitch;
            let min_minor = max_form + 2.0 * clearance;
            let width = ToothSizeBounds::internal(basic, tolerance.total(), tolerance.variation);
            let (max_pins, min_pins) =
                pin_measurements(&geometry, SplineKind::Internal, pin, &width);

            SplineDimensions::Internal(InternalDimensions {
                min_major_diameter: min_major,
                max_major_diameter: min_major + major_tolerance,
                min_form_diameter: (teeth + row.internal_form) / pitch + 2.0 * clearance,
                min_minor_diameter: min_minor,
                max_minor_diameter: Some(min_minor + minor_tolerance),
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
