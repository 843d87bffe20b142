//! # BS 3550 Derivation
//!
//! BS 3550 designations parse into a [`BsSpecification`] but have no
//! derivation; asking for dimensions is a defined error.

use tracing::debug;

use super::results::SplineDimensions;
use crate::designation::{BsSpecification, Standard};
use crate::errors::{SplineError, SplineResult};

pub fn calculate(spec: &BsSpecification) -> SplineResult<SplineDimensions> {
    debug!(teeth = spec.teeth, pitch = spec.diametral_pitch, "BS 3550 derivation requested");
    Err(SplineError::not_implemented(
        Standard::Bs3550.display_name(),
        "designation is recognized but dimensions are not derived",
    ))
}
