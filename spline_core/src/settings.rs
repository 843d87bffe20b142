//! # Output Settings
//!
//! How computed dimensions are presented: unit system, decimal places and
//! whether the designation heads the drawing data. Settings never influence
//! the derivation itself.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::settings::OutputSettings;
//! use spline_core::units::{LengthUnit, UnitSystem};
//!
//! let settings = OutputSettings::default();
//! assert_eq!(settings.display_unit(LengthUnit::Inch), LengthUnit::Inch);
//!
//! let metric = OutputSettings { units: Some(UnitSystem::Metric), ..Default::default() };
//! assert_eq!(metric.display_unit(LengthUnit::Inch), LengthUnit::Millimeter);
//! assert_eq!(metric.precision_for(LengthUnit::Inch).diameter, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{LengthUnit, UnitSystem};

/// Decimal places per group of values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    /// Pitch and base diameter
    pub reference_diameter: usize,
    /// Major, form and minor diameter
    pub diameter: usize,
    /// Thickness, space width, pin measurement and pin diameter
    pub thickness: usize,
    /// Fillet radius
    pub radius: usize,
}

impl Precision {
    /// Places used for millimeter values
    pub const fn metric() -> Self {
        Precision {
            reference_diameter: 4,
            diameter: 2,
            thickness: 3,
            radius: 1,
        }
    }

    /// Places used for inch values
    pub const fn imperial() -> Self {
        Precision {
            reference_diameter: 6,
            diameter: 4,
            thickness: 4,
            radius: 3,
        }
    }
}

/// Presentation settings for drawing data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Target unit system; `None` keeps the standard's own unit
    pub units: Option<UnitSystem>,
    /// Fixed decimal places; `None` picks them from the displayed unit
    pub precision: Option<Precision>,
    /// Start the drawing data with the designation as written
    pub include_spec_line: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            units: None,
            precision: None,
            include_spec_line: true,
        }
    }
}

impl OutputSettings {
    /// Unit values are shown in, given the unit they were computed in
    pub fn display_unit(&self, native: LengthUnit) -> LengthUnit {
        self.units.map_or(native, |system| system.length_unit())
    }

    /// Factor from the native unit to the displayed unit
    pub fn scale(&self, native: LengthUnit) -> f64 {
        self.units.map_or(1.0, |system| system.scale_from(native))
    }

    /// Decimal places for values computed in `native`
    pub fn precision_for(&self, native: LengthUnit) -> Precision {
        self.precision.unwrap_or(match self.display_unit(native) {
            LengthUnit::Millimeter => Precision::metric(),
            LengthUnit::Inch => Precision::imperial(),
        })
    }
}
