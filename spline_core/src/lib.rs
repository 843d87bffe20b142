//! # spline_core - Involute Spline Dimensioning Engine
//!
//! `spline_core` turns a compact spline designation, as written on a drawing,
//! into the full set of manufacturing and inspection dimensions: pitch and
//! base diameter, major/form/minor diameter limits, tooth thickness or space
//! width limits, pin diameter, measurement over or between pins and root
//! radius. All inputs and outputs are JSON-serializable.
//!
//! ## Supported Standards
//!
//! - **ISO 4156-1** - module series, millimeters, grades 4 to 7, fits d to k
//! - **ANSI B92.1** - diametral pitch series, inches, classes 4 to 7
//! - **BS 3550** - designations are parsed; derivation is not implemented
//!
//! ## Quick Start
//!
//! ```rust
//! use spline_core::{SplineCalculator, SplineDimensions};
//!
//! let calculator = SplineCalculator::new();
//! let report = calculator.calculate_designation("INT 25z x 1,0m x 30P x 5H - ISO 4156").unwrap();
//!
//! match &report.dimensions {
//!     SplineDimensions::Internal(int) => assert!((int.min_form_diameter - 26.2).abs() < 1e-9),
//!     SplineDimensions::External(_) => unreachable!(),
//! }
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("\"kind\": \"Internal\""));
//! ```
//!
//! ## Modules
//!
//! - [`designation`] - Designation parsing into a typed specification
//! - [`calculations`] - Per-standard derivations and result variants
//! - [`equations`] - Involute functions and shared geometry relations
//! - [`tables`] - Deviation, tolerance and preferred-number tables
//! - [`drawing`] - Drawing data rows
//! - [`settings`] - Output units and precision
//! - [`units`] - Type-safe length wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod designation;
pub mod drawing;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, SplineCalculator, SplineDimensions, SplineReport};
pub use designation::{SplineKind, SplineSpecification, Standard};
pub use drawing::DrawingData;
pub use errors::{SplineError, SplineResult};
pub use settings::OutputSettings;
pub use units::{LengthUnit, UnitSystem};
