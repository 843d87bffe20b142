//! # ISO 4156 Fundamental Deviations
//!
//! Fundamental deviations (µm) by pitch-diameter range and fit letter.
//!
//! ## Interval Convention
//!
//! The rounded pitch diameter `round(D)` (half to even) is matched against
//! contiguous closed-open intervals `[lower, upper)`. The last interval is
//! widened to include D = 1000 mm; anything larger is rejected before lookup.
//!
//! ## Tolerance-Derived Letters
//!
//! `js` and `k` are not tabulated. Their deviation follows from the total
//! space width tolerance T of the spline that first asks for them:
//!
//! ```text
//! js: ceil(T / 2)
//! k:  ceil(T)
//! ```
//!
//! and is then memoized per interval in [`FundamentalDeviations`].

use std::collections::HashMap;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::designation::FitLetter;
use crate::errors::{SplineError, SplineResult};

/// Largest pitch diameter (mm) covered by the deviation table
pub const MAX_PITCH_DIAMETER_MM: f64 = 1000.0;

const STANDARD: &str = "ISO 4156";

/// One pitch-diameter range of the deviation table
#[derive(Debug, Clone)]
pub struct DeviationInterval {
    /// Rounded pitch diameters covered, closed-open
    pub range: Range<u32>,
    /// Tabulated deviations in µm
    pub entries: HashMap<FitLetter, i32>,
}

/// (lower, upper, d, e, f) in mm / µm; h and H are always zero
const TABULATED: [(u32, u32, i32, i32, i32); 16] = [
    (1, 3, -20, -14, -6),
    (3, 7, -30, -20, -10),
    (7, 10, -40, -25, -13),
    (10, 18, -50, -32, -16),
    (18, 30, -65, -40, -20),
    (30, 50, -80, -50, -25),
    (50, 80, -100, -60, -30),
    (80, 120, -120, -72, -36),
    (120, 180, -145, -85, -43),
    (180, 250, -170, -100, -50),
    (250, 315, -190, -110, -56),
    (315, 400, -210, -125, -62),
    (400, 500, -230, -135, -68),
    (500, 630, -260, -145, -76),
    (630, 800, -290, -160, -80),
    (800, 1001, -320, -170, -86),
];

static DEVIATION_TABLE: Lazy<Vec<DeviationInterval>> = Lazy::new(|| {
    TABULATED
        .iter()
        .map(|&(lower, upper, d, e, f)| DeviationInterval {
            range: lower..upper,
            entries: HashMap::from([
                (FitLetter::D, d),
                (FitLetter::E, e),
                (FitLetter::F, f),
                (FitLetter::LowerH, 0),
                (FitLetter::UpperH, 0),
            ]),
        })
        .collect()
});

/// Reject pitch diameters the table cannot cover.
///
/// Called before any lookup so an oversize spline fails without partial work.
pub fn check_pitch_diameter(pitch_diameter_mm: f64) -> SplineResult<()> {
    if pitch_diameter_mm > MAX_PITCH_DIAMETER_MM {
        return Err(SplineError::out_of_range(
            "pitch_diameter_mm",
            pitch_diameter_mm,
            MAX_PITCH_DIAMETER_MM.to_string(),
        ));
    }
    Ok(())
}

/// Index of the interval containing `round(pitch_diameter_mm)`.
pub fn interval_index(pitch_diameter_mm: f64) -> SplineResult<usize> {
    let rounded = pitch_diameter_mm.round_ties_even();
    DEVIATION_TABLE
        .iter()
        .position(|interval| {
            rounded >= interval.range.start as f64 && rounded < interval.range.end as f64
        })
        .ok_or_else(|| {
            SplineError::out_of_range(
                "pitch_diameter_mm",
                pitch_diameter_mm,
                "rounded value between 1 and 1000",
            )
        })
}

/// Fundamental deviation lookup with memoized `js`/`k` synthesis.
///
/// The tabulated values are shared and immutable; only synthesized entries
/// are stored here. The cache is guarded so one instance can serve
/// concurrent calculations.
#[derive(Debug, Default)]
pub struct FundamentalDeviations {
    synthesized: Mutex<HashMap<(usize, FitLetter), i32>>,
}

impl FundamentalDeviations {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the fundamental deviation in µm.
    ///
    /// `total_space_width_tol_um` is only read when `fit` is `js` or `k`
    /// and the interval has no memoized value yet.
    pub fn lookup(
        &self,
        pitch_diameter_mm: f64,
        fit: &FitLetter,
        total_space_width_tol_um: f64,
    ) -> SplineResult<i32> {
        check_pitch_diameter(pitch_diameter_mm)?;
        let index = interval_index(pitch_diameter_mm)?;
        let interval = &DEVIATION_TABLE[index];
        debug!(index, range = ?interval.range, %fit, "fundamental deviation interval");

        if let Some(value) = interval.entries.get(fit) {
            return Ok(*value);
        }

        match fit {
            FitLetter::Js => Ok(self.get_or_compute(index, fit, || {
                (total_space_width_tol_um / 2.0).ceil() as i32
            })),
            FitLetter::K => {
                Ok(self.get_or_compute(index, fit, || total_space_width_tol_um.ceil() as i32))
            }
            other => Err(SplineError::unsupported_fit(STANDARD, other.as_str())),
        }
    }

    /// Return the memoized value for (interval, fit) or compute and store it.
    ///
    /// The check and the insert happen under one lock.
    pub fn get_or_compute(
        &self,
        interval: usize,
        fit: &FitLetter,
        compute: impl FnOnce() -> i32,
    ) -> i32 {
        let mut cache = self.synthesized.lock().unwrap_or_else(PoisonError::into_inner);
        *cache.entry((interval, fit.clone())).or_insert_with(|| {
            let value = compute();
            info!(interval, %fit, value, "synthesized fundamental deviation");
            value
        })
    }

    /// Number of memoized entries
    pub fn synthesized_len(&self) -> usize {
        self.synthesized.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
