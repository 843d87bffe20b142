//! # Calculation Results
//!
//! One result variant per spline kind, so a consumer can never read a
//! dimension that does not exist for the member it holds. All lengths are in
//! the native unit of the standard (see [`SplineGeometry::unit`]).

use serde::{Deserialize, Serialize};

use crate::designation::{SplineKind, SplineSpecification, Standard};
use crate::equations::geometry::PinMeasurement;
use crate::units::LengthUnit;

/// Size parameter the pitch diameter was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SizeParameter {
    /// ISO module m (mm)
    Module { module: f64 },
    /// ANSI diametral pitch P and stub pitch Ps (1/in)
    DiametralPitch { pitch: f64, stub_pitch: f64 },
}

/// Basic geometry common to both kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineGeometry {
    /// Standard the values were derived under
    pub standard: Standard,
    /// Unit of every length in the result
    pub unit: LengthUnit,
    /// Number of teeth
    pub teeth: u32,
    /// Pressure angle at the pitch diameter (degrees)
    pub pressure_angle_deg: f64,
    /// Module or diametral pitch
    pub size: SizeParameter,
    /// Pitch diameter D
    pub pitch_diameter: f64,
    /// Base diameter Db = D·cos α
    pub base_diameter: f64,
    /// Circular pitch p
    pub circular_pitch: f64,
    /// Base pitch pb = p·cos α
    pub base_pitch: f64,
}

/// Effective and actual size limits of a tooth thickness or space width.
///
/// Actual size is what a two-point measurement sees on a single tooth;
/// effective size includes the index, profile and lead variations that a
/// mating part feels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothSizeBounds {
    pub max_effective: f64,
    pub max_actual: f64,
    pub min_effective: f64,
    pub min_actual: f64,
}

impl ToothSizeBounds {
    /// External tooth thickness limits.
    ///
    /// # Formulas
    /// ```text
    /// s_v max = s_basic + es
    /// s max   = s_v max − λ
    /// s min   = s_v max − T
    /// s_v min = s min + λ
    /// ```
    pub fn external(max_effective: f64, total_tolerance: f64, variation: f64) -> Self {
        let max_actual = max_effective - variation;
        let min_actual = max_effective - total_tolerance;
        ToothSizeBounds {
            max_effective,
            max_actual,
            min_effective: min_actual + variation,
            min_actual,
        }
    }

    /// Internal space width limits.
    ///
    /// # Formulas
    /// ```text
    /// e_v min = e_basic
    /// e max   = e_v min + T
    /// e min   = e_v min + λ
    /// e_v max = e max − λ
    /// ```
    pub fn internal(min_effective: f64, total_tolerance: f64, variation: f64) -> Self {
        let max_actual = min_effective + total_tolerance;
        ToothSizeBounds {
            max_effective: max_actual - variation,
            max_actual,
            min_effective,
            min_actual: min_effective + variation,
        }
    }
}

/// Pin measurement limits: (from max actual size, from min actual size)
pub(crate) fn pin_measurements(
    geometry: &SplineGeometry,
    kind: SplineKind,
    pin_diameter: f64,
    bounds: &ToothSizeBounds,
) -> (f64, f64) {
    let pins = PinMeasurement {
        kind,
        teeth: geometry.teeth,
        pitch_diameter: geometry.pitch_diameter,
        base_diameter: geometry.base_diameter,
        pressure_angle_deg: geometry.pressure_angle_deg,
        pin_diameter,
    };
    (pins.measure(bounds.max_actual), pins.measure(bounds.min_actual))
}

/// Dimensions of an external (shaft) spline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDimensions {
    pub geometry: SplineGeometry,
    /// Maximum major diameter D_ee max
    pub max_major_diameter: f64,
    /// Minimum major diameter, where the standard tabulates a major diameter tolerance
    pub min_major_diameter: Option<f64>,
    /// Maximum form diameter D_Fe max
    pub max_form_diameter: f64,
    /// Maximum minor diameter D_ie max
    pub max_minor_diameter: f64,
    /// Minimum minor diameter D_ie min
    pub min_minor_diameter: f64,
    pub max_effective_thickness: f64,
    pub max_actual_thickness: f64,
    pub min_effective_thickness: f64,
    pub min_actual_thickness: f64,
    /// Measurement over pins at max actual thickness
    pub max_measurement_over_pins: f64,
    /// Measurement over pins at min actual thickness
    pub min_measurement_over_pins: f64,
    pub pin_diameter: f64,
    pub root_radius: f64,
}

impl ExternalDimensions {
    /// Thickness limits as one value
    pub fn thickness(&self) -> ToothSizeBounds {
        ToothSizeBounds {
            max_effective: self.max_effective_thickness,
            max_actual: self.max_actual_thickness,
            min_effective: self.min_effective_thickness,
            min_actual: self.min_actual_thickness,
        }
    }
}

/// Dimensions of an internal (hub) spline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalDimensions {
    pub geometry: SplineGeometry,
    /// Minimum major diameter D_ei min
    pub min_major_diameter: f64,
    /// Maximum major diameter D_ei max
    pub max_major_diameter: f64,
    /// Minimum form diameter D_Fi min
    pub min_form_diameter: f64,
    /// Minimum minor diameter D_ii min
    pub min_minor_diameter: f64,
    /// Maximum minor diameter, where the standard tabulates a minor diameter tolerance
    pub max_minor_diameter: Option<f64>,
    pub max_actual_width: f64,
    pub max_effective_width: f64,
    pub min_actual_width: f64,
    pub min_effective_width: f64,
    /// Measurement between pins at max actual space width
    pub max_measurement_between_pins: f64,
    /// Measurement between pins at min actual space width
    pub min_measurement_between_pins: f64,
    pub pin_diameter: f64,
    pub root_radius: f64,
}

impl InternalDimensions {
    /// Space width limits as one value
    pub fn space_width(&self) -> ToothSizeBounds {
        ToothSizeBounds {
            max_effective: self.max_effective_width,
            max_actual: self.max_actual_width,
            min_effective: self.min_effective_width,
            min_actual: self.min_actual_width,
        }
    }
}

/// Computed dimensions, one variant per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SplineDimensions {
    External(ExternalDimensions),
    Internal(InternalDimensions),
}

impl SplineDimensions {
    /// Geometry shared by both variants
    pub fn geometry(&self) -> &SplineGeometry {
        match self {
            SplineDimensions::External(ext) => &ext.geometry,
            SplineDimensions::Internal(int) => &int.geometry,
        }
    }

    /// Which member this is
    pub fn kind(&self) -> SplineKind {
        match self {
            SplineDimensions::External(_) => SplineKind::External,
            SplineDimensions::Internal(_) => SplineKind::Internal,
        }
    }

    /// External dimensions, if this is an external spline
    pub fn as_external(&self) -> Option<&ExternalDimensions> {
        match self {
            SplineDimensions::External(ext) => Some(ext),
            SplineDimensions::Internal(_) => None,
        }
    }

    /// Internal dimensions, if this is an internal spline
    pub fn as_internal(&self) -> Option<&InternalDimensions> {
        match self {
            SplineDimensions::External(_) => None,
            SplineDimensions::Internal(int) => Some(int),
        }
    }
}

/// A designation together with everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineReport {
    /// Designation as written
    pub designation: String,
    pub specification: SplineSpecification,
    pub dimensions: SplineDimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_bounds_ordering() {
        let bounds = ToothSizeBounds::external(1.5708, 0.0344, 0.0156);
        assert!(bounds.max_actual <= bounds.max_effective);
        assert!(bounds.min_actual <= bounds.min_effective);
        assert!((bounds.min_actual - 1.5364).abs() < 1e-9);
        assert!((bounds.min_effective - 1.552).abs() < 1e-9);
    }

    #[test]
    fn test_internal_bounds_ordering() {
        let bounds = ToothSizeBounds::internal(1.5708, 0.0550, 0.0226);
        assert!(bounds.max_actual >= bounds.max_effective);
        assert!(bounds.min_actual >= bounds.min_effective);
        assert!((bounds.max_actual - 1.6258).abs() < 1e-9);
        assert!((bounds.max_effective - 1.6032).abs() < 1e-9);
    }
}
