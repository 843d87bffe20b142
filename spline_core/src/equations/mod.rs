//! # Spline Equations
//!
//! Closed-form relations used by every standard. Keeping them in one place
//! means the ISO and ANSI engines evaluate exactly the same involute
//! approximation.
//!
//! ## Modules
//!
//! - [`involute`] - involute, inverse involute and sevolute
//! - [`geometry`] - form diameter, pin sizes and pin measurements
//!
//! ## Conventions
//!
//! - **Angles**: degrees at every public boundary, radians internally
//! - **Lengths**: whatever unit the caller's standard uses (mm or in); no
//!   function here converts units
//! - **Inverse involute**: returns radians

pub mod geometry;
pub mod involute;

pub use geometry::{external_pin_size, form_diameter, internal_pin_size, PinMeasurement};
pub use involute::{involute, inverse_involute, sevolute};
