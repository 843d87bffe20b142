//! # Unit Types
//!
//! Lightweight length wrappers for spline dimensions. ISO 4156 results are
//! native millimeters, ANSI B92.1 results are native inches. Conversion
//! happens exactly once, at output time, through a single multiplicative
//! factor. Angles and tooth counts are never scaled.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::units::{Inches, LengthUnit, Millimeters, UnitSystem};
//!
//! let pin = Millimeters(1.9);
//! let pin_in: Inches = pin.into();
//! assert!((pin_in.0 - 0.0748).abs() < 1e-4);
//!
//! // ANSI values shown on a metric drawing
//! assert_eq!(UnitSystem::Metric.scale_from(LengthUnit::Inch), 25.4);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Inches);

// ============================================================================
// Unit Systems
// ============================================================================

/// Native length unit of a computed result, fixed by the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters (ISO 4156)
    Millimeter,
    /// Inches (ANSI B92.1, BS 3550)
    Inch,
}

impl LengthUnit {
    /// Symbol used in drawing data
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
        }
    }
}

/// Unit system requested for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Show lengths in millimeters
    #[default]
    Metric,
    /// Show lengths in inches
    Imperial,
}

impl UnitSystem {
    /// Length unit this system presents
    pub fn length_unit(&self) -> LengthUnit {
        match self {
            UnitSystem::Metric => LengthUnit::Millimeter,
            UnitSystem::Imperial => LengthUnit::Inch,
        }
    }

    /// Factor that converts a length in `source` units into this system.
    pub fn scale_from(&self, source: LengthUnit) -> f64 {
        match (source, self) {
            (LengthUnit::Millimeter, UnitSystem::Metric) => 1.0,
            (LengthUnit::Millimeter, UnitSystem::Imperial) => 1.0 / MM_PER_INCH,
            (LengthUnit::Inch, UnitSystem::Metric) => MM_PER_INCH,
            (LengthUnit::Inch, UnitSystem::Imperial) => 1.0,
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" | "mm" => Ok(UnitSystem::Metric),
            "imperial" | "inch" | "in" => Ok(UnitSystem::Imperial),
            other => Err(format!("unknown unit system '{}' (use metric or imperial)", other)),
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_millimeters() {
        let inches = Inches(2.5);
        let mm: Millimeters = inches.into();
        assert!((mm.0 - 63.5).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(10.0);
        let b = Millimeters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_scale_factors() {
        assert_eq!(UnitSystem::Metric.scale_from(LengthUnit::Millimeter), 1.0);
        assert_eq!(UnitSystem::Imperial.scale_from(LengthUnit::Inch), 1.0);
        let to_inches = UnitSystem::Imperial.scale_from(LengthUnit::Millimeter);
        assert!((to_inches * 25.4 - 1.0).abs() < 1e-12);
        assert_eq!(UnitSystem::Metric.scale_from(LengthUnit::Inch), 25.4);
    }

    #[test]
    fn test_parse_unit_system() {
        assert_eq!("Imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!("mm".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert!("furlong".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Millimeters(12.5)).unwrap();
        assert_eq!(json, "12.5");
        assert_eq!(serde_json::to_string(&UnitSystem::Imperial).unwrap(), "\"imperial\"");
    }
}
