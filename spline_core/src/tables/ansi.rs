//! # ANSI B92.1 Tolerance Tables
//!
//! Space width / tooth thickness tolerances and major/minor diameter
//! tolerances per standard diametral pitch.
//!
//! ## Space Width Tolerance
//!
//! The class 5 tolerance is split into a machining tolerance `m` and an
//! effective variation allowance `λ`, each linear in the number of teeth:
//!
//! ```text
//! m5 = (a_m + b_m·N) × 0.0001 in
//! λ5 = (a_λ + b_λ·N) × 0.0001 in
//! ```
//!
//! Other classes scale both components:
//!
//! | Class | Multiplier |
//! |-------|------------|
//! | 4     | 0.71       |
//! | 5     | 1.00       |
//! | 6     | 1.40       |
//! | 7     | 2.00       |
//!
//! ## Pitch Rows
//!
//! A row covers pitches from its own value up to the next row's value
//! (closed-open); the 48/96 row is closed at 48.

use serde::{Deserialize, Serialize};

use crate::errors::{SplineError, SplineResult};

const STANDARD: &str = "ANSI B92.1";

/// Tolerances tabulated for one standard diametral pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchTolerances {
    /// Diametral pitch P of the row
    pub pitch: f64,
    /// Machining tolerance coefficients (a, b), 0.0001 in
    pub machining: (f64, f64),
    /// Effective variation coefficients (a, b), 0.0001 in
    pub variation: (f64, f64),
    /// Major diameter tolerance (in) for classes 4, 5, 6, 7
    pub major_diameter: [f64; 4],
    /// Minor diameter tolerance (in) for classes 4, 5, 6, 7
    pub minor_diameter: [f64; 4],
}

const fn row(
    pitch: f64,
    machining: (f64, f64),
    variation: (f64, f64),
    major_diameter: [f64; 4],
    minor_diameter: [f64; 4],
) -> PitchTolerances {
    PitchTolerances {
        pitch,
        machining,
        variation,
        major_diameter,
        minor_diameter,
    }
}

/// Standard pitches 2.5/5 through 48/96, ascending
pub const PITCH_TABLE: [PitchTolerances; 14] = [
    row(
        2.5,
        (40.0, 0.20),
        (30.0, 0.20),
        [0.010, 0.012, 0.015, 0.018],
        [0.014, 0.017, 0.021, 0.025],
    ),
    row(
        3.0,
        (36.0, 0.18),
        (27.0, 0.18),
        [0.009, 0.011, 0.013, 0.016],
        [0.013, 0.015, 0.019, 0.022],
    ),
    row(
        4.0,
        (31.0, 0.16),
        (23.0, 0.16),
        [0.008, 0.009, 0.011, 0.014],
        [0.011, 0.013, 0.016, 0.019],
    ),
    row(
        5.0,
        (27.0, 0.14),
        (20.0, 0.14),
        [0.007, 0.008, 0.010, 0.012],
        [0.010, 0.011, 0.014, 0.017],
    ),
    row(
        6.0,
        (25.0, 0.13),
        (18.0, 0.13),
        [0.006, 0.007, 0.009, 0.011],
        [0.009, 0.010, 0.012, 0.015],
    ),
    row(
        8.0,
        (21.0, 0.11),
        (15.0, 0.11),
        [0.005, 0.006, 0.008, 0.009],
        [0.007, 0.008, 0.010, 0.012],
    ),
    row(
        10.0,
        (19.0, 0.10),
        (13.0, 0.10),
        [0.004, 0.005, 0.007, 0.008],
        [0.006, 0.007, 0.009, 0.011],
    ),
    row(
        12.0,
        (17.0, 0.09),
        (12.0, 0.09),
        [0.004, 0.005, 0.006, 0.007],
        [0.005, 0.006, 0.008, 0.010],
    ),
    row(
        16.0,
        (15.0, 0.08),
        (10.0, 0.08),
        [0.003, 0.004, 0.005, 0.006],
        [0.004, 0.005, 0.007, 0.008],
    ),
    row(
        20.0,
        (14.0, 0.07),
        (9.0, 0.07),
        [0.003, 0.004, 0.005, 0.006],
        [0.004, 0.005, 0.006, 0.007],
    ),
    row(
        24.0,
        (13.0, 0.065),
        (8.5, 0.065),
        [0.003, 0.003, 0.004, 0.005],
        [0.003, 0.004, 0.005, 0.006],
    ),
    row(
        32.0,
        (12.0, 0.06),
        (8.0, 0.06),
        [0.002, 0.003, 0.004, 0.005],
        [0.003, 0.004, 0.005, 0.006],
    ),
    row(
        40.0,
        (11.0, 0.055),
        (7.5, 0.055),
        [0.002, 0.003, 0.003, 0.004],
        [0.003, 0.003, 0.004, 0.005],
    ),
    row(
        48.0,
        (10.0, 0.05),
        (7.0, 0.05),
        [0.002, 0.002, 0.003, 0.004],
        [0.002, 0.003, 0.004, 0.005],
    ),
];

/// Tolerance class multiplier relative to class 5
pub fn class_multiplier(class: u8) -> SplineResult<f64> {
    match class {
        4 => Ok(0.71),
        5 => Ok(1.00),
        6 => Ok(1.40),
        7 => Ok(2.00),
        other => Err(SplineError::unsupported_grade(STANDARD, other)),
    }
}

fn class_column(class: u8) -> SplineResult<usize> {
    match class {
        4..=7 => Ok(usize::from(class - 4)),
        other => Err(SplineError::unsupported_grade(STANDARD, other)),
    }
}

/// Row covering diametral pitch `pitch`.
pub fn pitch_row(pitch: f64) -> SplineResult<&'static PitchTolerances> {
    let first = PITCH_TABLE[0].pitch;
    let last = PITCH_TABLE[PITCH_TABLE.len() - 1].pitch;
    if !(first..=last).contains(&pitch) {
        return Err(SplineError::out_of_range(
            "diametral_pitch",
            pitch,
            format!("{} to {}", first, last),
        ));
    }

    let index = PITCH_TABLE
        .iter()
        .rposition(|row| row.pitch <= pitch)
        .unwrap_or(0);
    Ok(&PITCH_TABLE[index])
}

/// Space width / tooth thickness tolerance split into its two components (in)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceWidthTolerance {
    /// Machining tolerance m
    pub machining: f64,
    /// Effective variation allowance λ
    pub variation: f64,
}

impl SpaceWidthTolerance {
    /// Total tolerance m + λ
    pub fn total(&self) -> f64 {
        self.machining + self.variation
    }
}

/// Space width tolerance for `teeth` teeth at `pitch`, tolerance class `class`.
///
/// # Example
/// ```rust
/// use spline_core::tables::ansi::space_width_tolerance;
///
/// let tol = space_width_tolerance(12.0, 30, 5).unwrap();
/// // m = (17 + 0.09·30)·1e-4, λ = (12 + 0.09·30)·1e-4
/// assert!((tol.machining - 0.00197).abs() < 1e-9);
/// assert!((tol.variation - 0.00147).abs() < 1e-9);
/// ```
pub fn space_width_tolerance(
    pitch: f64,
    teeth: u32,
    class: u8,
) -> SplineResult<SpaceWidthTolerance> {
    let multiplier = class_multiplier(class)?;
    let row = pitch_row(pitch)?;
    let n = teeth as f64;
    let linear = |(a, b): (f64, f64)| (a + b * n) * 1e-4 * multiplier;

    Ok(SpaceWidthTolerance {
        machining: linear(row.machining),
        variation: linear(row.variation),
    })
}

/// Major and minor diameter tolerances (in) for `pitch` and class.
pub fn diameter_tolerances(pitch: f64, class: u8) -> SplineResult<(f64, f64)> {
    let column = class_column(class)?;
    let row = pitch_row(pitch)?;
    Ok((row.major_diameter[column], row.minor_diameter[column]))
}
