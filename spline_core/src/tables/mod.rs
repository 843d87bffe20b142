//! # Lookup Tables
//!
//! Static data consulted by the calculation engines.
//!
//! - [`iso`] - ISO 4156 fundamental deviations by pitch-diameter range
//! - [`ansi`] - ANSI B92.1 space width and diameter tolerances by pitch
//! - [`renard`] - Preferred-number series for measuring pin sizes

pub mod ansi;
pub mod iso;
pub mod renard;

pub use iso::FundamentalDeviations;
pub use renard::{find_greater_than_or_equal, PreferredSeries};
