//! # Drawing Data
//!
//! Ordered, labelled rows for the spline data table of a manufacturing
//! drawing (ISO 4156-1 clause 12.4 layout). Lengths are scaled and rounded
//! per [`OutputSettings`]; tooth counts and angles are never scaled.
//!
//! ## Example
//!
//! ```rust
//! use spline_core::calculations::SplineCalculator;
//! use spline_core::drawing::DrawingData;
//! use spline_core::settings::OutputSettings;
//!
//! let report = SplineCalculator::new()
//!     .calculate_designation("INT 25z x 1,0m x 30P x 5H - ISO 4156")
//!     .unwrap();
//! let drawing = DrawingData::new(&report, &OutputSettings::default());
//! let text = drawing.to_string();
//! assert!(text.contains("Pitch diameter 25.0000 mm"));
//! assert!(text.contains("Form diameter 26.20 mm"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::{
    ExternalDimensions, InternalDimensions, SizeParameter, SplineDimensions, SplineReport,
};
use crate::settings::{OutputSettings, Precision};
use crate::units::LengthUnit;

/// One labelled line of drawing data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingRow {
    pub label: String,
    /// Already rounded and formatted
    pub value: String,
    /// Unit symbol for lengths
    pub unit: Option<String>,
}

impl fmt::Display for DrawingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {} {}", self.label, self.value, unit),
            None => write!(f, "{} {}", self.label, self.value),
        }
    }
}

/// Drawing data for one spline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingData {
    /// Designation line, when requested
    pub designation: Option<String>,
    /// Unit every length row is expressed in
    pub unit: LengthUnit,
    pub rows: Vec<DrawingRow>,
}

/// Collects rows with the scale and precision of one output
struct RowBuilder {
    rows: Vec<DrawingRow>,
    scale: f64,
    unit: LengthUnit,
}

impl RowBuilder {
    fn text(&mut self, label: &str, value: String) {
        self.rows.push(DrawingRow {
            label: label.to_string(),
            value,
            unit: None,
        });
    }

    fn length(&mut self, label: &str, value: f64, places: usize) {
        self.rows.push(DrawingRow {
            label: label.to_string(),
            value: format!("{:.*}", places, value * self.scale),
            unit: Some(self.unit.symbol().to_string()),
        });
    }
}

impl DrawingData {
    /// Build the rows for a computed spline.
    pub fn new(report: &SplineReport, settings: &OutputSettings) -> Self {
        let geometry = report.dimensions.geometry();
        let native = geometry.unit;
        let unit = settings.display_unit(native);
        let places = settings.precision_for(native);
        let mut builder = RowBuilder {
            rows: Vec::new(),
            scale: settings.scale(native),
            unit,
        };

        builder.text("Number of teeth", geometry.teeth.to_string());
        match geometry.size {
            SizeParameter::Module { module } => builder.text("Module", format!("{:.2}", module)),
            SizeParameter::DiametralPitch { pitch, stub_pitch } => {
                builder.text("Diametral pitch", format!("{}/{}", pitch, stub_pitch))
            }
        }
        builder.text("Pressure angle", format!("{:.1}", geometry.pressure_angle_deg));
        builder.length("Pitch diameter", geometry.pitch_diameter, places.reference_diameter);
        builder.length("Base diameter", geometry.base_diameter, places.reference_diameter);

        match &report.dimensions {
            SplineDimensions::External(ext) => external_rows(&mut builder, ext, &places),
            SplineDimensions::Internal(int) => internal_rows(&mut builder, int, &places),
        }

        DrawingData {
            designation: settings.include_spec_line.then(|| report.designation.clone()),
            unit,
            rows: builder.rows,
        }
    }
}

fn external_rows(builder: &mut RowBuilder, ext: &ExternalDimensions, places: &Precision) {
    builder.length("Major diameter", ext.max_major_diameter, places.diameter);
    builder.length("Form diameter", ext.max_form_diameter, places.diameter);
    builder.length("Minor diameter", ext.min_minor_diameter, places.diameter);
    builder.length("Max effective tooth thickness", ext.max_effective_thickness, places.thickness);
    builder.length("Max actual tooth thickness", ext.max_actual_thickness, places.thickness);
    builder.length("Min effective tooth thickness", ext.min_effective_thickness, places.thickness);
    builder.length("Min actual tooth thickness", ext.min_actual_thickness, places.thickness);
    builder.length("Max measurement over pins", ext.max_measurement_over_pins, places.thickness);
    builder.length("Min measurement over pins", ext.min_measurement_over_pins, places.thickness);
    builder.length("Pin diameter", ext.pin_diameter, places.thickness);
    builder.length("Fillet radius", ext.root_radius, places.radius);
}

fn internal_rows(builder: &mut RowBuilder, int: &InternalDimensions, places: &Precision) {
    builder.length("Major diameter", int.max_major_diameter, places.diameter);
    builder.length("Form diameter", int.min_form_diameter, places.diameter);
    builder.length("Minor diameter", int.min_minor_diameter, places.diameter);
    builder.length("Max actual space width", int.max_actual_width, places.thickness);
    builder.length("Max effective space width", int.max_effective_width, places.thickness);
    builder.length("Min actual space width", int.min_actual_width, places.thickness);
    builder.length("Min effective space width", int.min_effective_width, places.thickness);
    builder.length(
        "Max measurement between pins",
        int.max_measurement_between_pins,
        places.thickness,
    );
    builder.length(
        "Min measurement between pins",
        int.min_measurement_between_pins,
        places.thickness,
    );
    builder.length("Pin diameter", int.pin_diameter, places.thickness);
    builder.length("Fillet radius", int.root_radius, places.radius);
}

impl fmt::Display for DrawingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(designation) = &self.designation {
            writeln!(f, "{}", designation)?;
        }
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::SplineCalculator;
    use crate::units::UnitSystem;

    fn drawing(designation: &str, settings: &OutputSettings) -> DrawingData {
        let report = SplineCalculator::new().calculate_designation(designation).unwrap();
        DrawingData::new(&report, settings)
    }

    fn value<'a>(data: &'a DrawingData, label: &str) -> &'a str {
        data.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
            .unwrap_or_else(|| panic!("missing row {}", label))
    }

    #[test]
    fn test_internal_rows() {
        let data = drawing("INT 25z 1,0m 30P 5H", &OutputSettings::default());
        assert_eq!(data.designation.as_deref(), Some("INT 25z 1,0m 30P 5H"));
        assert_eq!(data.rows.len(), 16);
        assert_eq!(value(&data, "Number of teeth"), "25");
        assert_eq!(value(&data, "Module"), "1.00");
        assert_eq!(value(&data, "Pressure angle"), "30.0");
        assert_eq!(value(&data, "Base diameter"), "21.6506");
        assert_eq!(value(&data, "Major diameter"), "26.74");
        assert_eq!(value(&data, "Minor diameter"), "24.09");
        assert_eq!(value(&data, "Max actual space width"), "1.626");
        assert_eq!(value(&data, "Pin diameter"), "1.800");
        assert_eq!(value(&data, "Fillet radius"), "0.2");
    }

    #[test]
    fn test_external_rows() {
        let data = drawing("EXT 25z 1,0m 30P 4h", &OutputSettings::default());
        assert_eq!(value(&data, "Major diameter"), "26.00");
        assert_eq!(value(&data, "Form diameter"), "23.89");
        assert_eq!(value(&data, "Minor diameter"), "23.26");
        assert_eq!(value(&data, "Max effective tooth thickness"), "1.571");
        assert_eq!(value(&data, "Max measurement over pins"), "27.846");
    }

    #[test]
    fn test_imperial_output_of_iso_values() {
        let settings = OutputSettings {
            units: Some(UnitSystem::Imperial),
            ..Default::default()
        };
        let data = drawing("EXT 25z 1,0m 30P 4h", &settings);
        assert_eq!(data.unit, LengthUnit::Inch);
        // 25 mm
        assert_eq!(value(&data, "Pitch diameter"), "0.984252");
        // angles and counts are never scaled
        assert_eq!(value(&data, "Pressure angle"), "30.0");
        assert_eq!(value(&data, "Number of teeth"), "25");
    }

    #[test]
    fn test_ansi_rows_in_inches() {
        let data = drawing("EXT FLAT SIDE 12/24 30T 30 class 5", &OutputSettings::default());
        assert_eq!(value(&data, "Diametral pitch"), "12/24");
        assert_eq!(value(&data, "Pitch diameter"), "2.500000");
        assert_eq!(value(&data, "Base diameter"), "2.165064");
        assert_eq!(value(&data, "Pin diameter"), "0.1440");
    }

    #[test]
    fn test_metric_output_of_ansi_values() {
        let settings = OutputSettings {
            units: Some(UnitSystem::Metric),
            ..Default::default()
        };
        let data = drawing("EXT FLAT SIDE 12/24 30T 30 class 5", &settings);
        assert_eq!(value(&data, "Pitch diameter"), "63.5000");
    }

    #[test]
    fn test_display_without_spec_line() {
        let settings = OutputSettings {
            include_spec_line: false,
            ..Default::default()
        };
        let text = drawing("EXT 25z 1m 30P 4h", &settings).to_string();
        assert!(text.starts_with("Number of teeth 25\n"));
        assert!(text.contains("Major diameter 26.00 mm\n"));
    }
}
