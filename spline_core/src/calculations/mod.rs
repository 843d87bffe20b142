//! # Spline Calculations
//!
//! One derivation per standard, each a straight-line pipeline:
//!
//! - [`iso`] - ISO 4156 (module, mm)
//! - [`ansi`] - ANSI B92.1 (diametral pitch, in)
//! - [`bs`] - BS 3550, recognized but not derived
//!
//! Both working engines end in the same finalization: tooth size bounds
//! from [`ToothSizeBounds`], then the pin measurement. The result is one of
//! two explicit variants, [`ExternalDimensions`] or [`InternalDimensions`].
//!
//! ## Example
//!
//! ```rust
//! use spline_core::calculations::SplineCalculator;
//!
//! let calculator = SplineCalculator::new();
//! let report = calculator.calculate_designation("EXT 25z x 1,0m x 30P x 4h - ISO 4156").unwrap();
//! let ext = report.dimensions.as_external().unwrap();
//! assert!((ext.max_major_diameter - 26.0).abs() < 1e-9);
//! ```

pub mod ansi;
pub mod bs;
pub mod iso;
pub mod results;

use tracing::debug;

use crate::designation::SplineSpecification;
use crate::errors::SplineResult;
use crate::tables::FundamentalDeviations;

pub use results::{
    ExternalDimensions, InternalDimensions, SizeParameter, SplineDimensions, SplineGeometry,
    SplineReport, ToothSizeBounds,
};

/// Derivation entry point.
///
/// Owns the memo of synthesized `js`/`k` deviations, so repeated
/// calculations through one calculator agree with each other. The
/// calculator is `Send + Sync` and can be shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct SplineCalculator {
    deviations: FundamentalDeviations,
}

impl SplineCalculator {
    /// Create a calculator with an empty deviation memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Deviation memo used by the ISO engine
    pub fn deviations(&self) -> &FundamentalDeviations {
        &self.deviations
    }

    /// Derive the dimensions of a parsed specification.
    pub fn calculate(&self, spec: &SplineSpecification) -> SplineResult<SplineDimensions> {
        debug!(
            standard = %spec.standard(),
            kind = ?spec.kind(),
            teeth = spec.teeth(),
            "calculating spline"
        );
        match spec {
            SplineSpecification::Iso(iso_spec) => iso::calculate(iso_spec, &self.deviations),
            SplineSpecification::Ansi(ansi_spec) => ansi::calculate(ansi_spec),
            SplineSpecification::Bs(bs_spec) => bs::calculate(bs_spec),
        }
    }

    /// Parse a designation and derive its dimensions in one step.
    pub fn calculate_designation(&self, designation: &str) -> SplineResult<SplineReport> {
        let specification = SplineSpecification::parse(designation)?;
        self.report(designation, specification)
    }

    /// Derive dimensions for an already parsed (and possibly adjusted) specification.
    pub fn report(
        &self,
        designation: &str,
        specification: SplineSpecification,
    ) -> SplineResult<SplineReport> {
        let dimensions = self.calculate(&specification)?;
        Ok(SplineReport {
            designation: designation.trim().to_string(),
            specification,
            dimensions,
        })
    }
}

/// Parse and derive with a fresh calculator.
///
/// # Example
/// ```rust
/// let result = spline_core::calculations::calculate("INT 25z 1,0m 30P 5H").unwrap();
/// assert!((result.geometry().pitch_diameter - 25.0).abs() < 1e-12);
/// ```
pub fn calculate(designation: &str) -> SplineResult<SplineDimensions> {
    let spec = SplineSpecification::parse(designation)?;
    SplineCalculator::new().calculate(&spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designation::SplineKind;

    #[test]
    fn test_dispatch_by_standard() {
        let calculator = SplineCalculator::new();
        let iso = calculator.calculate_designation("EXT 25z 1m 30P 5h").unwrap();
        assert_eq!(iso.dimensions.kind(), SplineKind::External);
        assert_eq!(iso.dimensions.geometry().unit.symbol(), "mm");

        let ansi = calculator.calculate_designation("INT FLAT SIDE 12/24 30T 30 class 5").unwrap();
        assert_eq!(ansi.dimensions.kind(), SplineKind::Internal);
        assert_eq!(ansi.dimensions.geometry().unit.symbol(), "in");

        let bs = calculator.calculate_designation("EXT FLAT SIDE 16/32 24T 30 BS 3550");
        assert_eq!(bs.unwrap_err().error_code(), "NOT_IMPLEMENTED");
    }

    #[test]
    fn test_idempotent() {
        let calculator = SplineCalculator::new();
        let spec = SplineSpecification::parse("EXT 25z 1m 30P 5js").unwrap();
        let first = calculator.calculate(&spec).unwrap();
        let second = calculator.calculate(&spec).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_js_deviation_is_memoized() {
        let calculator = SplineCalculator::new();
        let first = calculator.calculate_designation("EXT 25z 1m 30P 5js").unwrap();
        let again = calculator.calculate_designation("EXT 25z 1m 30P 5js").unwrap();
        assert_eq!(calculator.deviations().synthesized_len(), 1);

        let thickness = |report: &SplineReport| {
            report.dimensions.as_external().unwrap().max_effective_thickness
        };
        // T = 55.03 µm, so js = ceil(T/2) = 28 µm
        let basic = 0.5 * std::f64::consts::PI;
        assert!((thickness(&first) - basic - 0.028).abs() < 1e-12);
        assert_eq!(thickness(&first), thickness(&again));
    }

    #[test]
    fn test_variant_accessors() {
        let result = calculate("INT 25z 1m 30P 5H").unwrap();
        assert!(result.as_external().is_none());
        assert!(result.as_internal().is_some());
    }

    #[test]
    fn test_report_keeps_designation() {
        let report = SplineCalculator::new()
            .calculate_designation("  EXT 25z 1m 30P 5h  ")
            .unwrap();
        assert_eq!(report.designation, "EXT 25z 1m 30P 5h");
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate("EXT 25z 1m 30P 4h").unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"kind\":\"External\""));
        assert!(json.contains("\"max_major_diameter\""));
        let parsed: SplineDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind(), SplineKind::External);
        assert_eq!(parsed.geometry().teeth, 25);
    }
}
