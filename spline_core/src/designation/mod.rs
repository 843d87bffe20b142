//! # Spline Designations
//!
//! Parses the compact designation a designer writes on a drawing into a
//! typed specification. The standard is detected first, then a strict-arity
//! parser for that standard assigns the remaining tokens positionally.
//!
//! ## Grammar
//!
//! | Standard   | Fields (in order)                                             |
//! |------------|---------------------------------------------------------------|
//! | ISO 4156   | kind, teeth `25z`, module `1,0m`, angle+root `30P`, grade+fit `5H` |
//! | ANSI B92.1 | kind, root, fit, pitch `12/24`, teeth `30T`, angle, class     |
//! | BS 3550    | kind, root, fit, pitch `12/24`, teeth `30T`, angle            |
//!
//! ## Example
//!
//! ```rust
//! use spline_core::designation::{SplineSpecification, SplineKind, Standard};
//!
//! let spec: SplineSpecification = "EXT 25z x 1,0m x 30P x 4h - ISO 4156".parse().unwrap();
//! assert_eq!(spec.standard(), Standard::Iso4156);
//! assert_eq!(spec.kind(), SplineKind::External);
//! assert_eq!(spec.teeth(), 25);
//! ```

pub mod tokens;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SplineError, SplineResult};
use crate::units::{LengthUnit, Millimeters};
use self::tokens::{
    detect_standard, parse_grade, parse_positive, parse_teeth, split_suffix, tokenize,
};

// ============================================================================
// Field Enums
// ============================================================================

/// Spline standard a designation is written against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standard {
    /// ISO 4156-1 (metric module)
    Iso4156,
    /// ANSI B92.1 (inch diametral pitch)
    AnsiB92,
    /// BS 3550 (inch diametral pitch), parsed only
    Bs3550,
}

impl Standard {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Standard::Iso4156 => "ISO 4156",
            Standard::AnsiB92 => "ANSI B92.1",
            Standard::Bs3550 => "BS 3550",
        }
    }

    /// Native length unit of values derived under this standard
    pub fn length_unit(&self) -> LengthUnit {
        match self {
            Standard::Iso4156 => LengthUnit::Millimeter,
            Standard::AnsiB92 | Standard::Bs3550 => LengthUnit::Inch,
        }
    }
}

impl std::fmt::Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// External (shaft) or internal (hub) member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplineKind {
    /// Teeth point outward
    External,
    /// Teeth point inward
    Internal,
}

impl SplineKind {
    fn parse(raw: &str) -> SplineResult<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "EXT" | "EXTERNAL" => Ok(SplineKind::External),
            "INT" | "INTERNAL" => Ok(SplineKind::Internal),
            _ => Err(SplineError::invalid_input("kind", raw, "Expected EXT or INT")),
        }
    }

    /// Designation code
    pub fn code(&self) -> &'static str {
        match self {
            SplineKind::External => "EXT",
            SplineKind::Internal => "INT",
        }
    }
}

/// Root form of the tooth space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootType {
    /// Full fillet root (ISO `R`)
    Fillet,
    /// Flat root (ISO `P`)
    Flat,
}

impl RootType {
    fn parse(raw: &str) -> SplineResult<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "FILLET" | "R" => Ok(RootType::Fillet),
            "FLAT" | "P" => Ok(RootType::Flat),
            _ => Err(SplineError::invalid_input("root", raw, "Expected FLAT or FILLET")),
        }
    }
}

/// ANSI fit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitType {
    /// Side fit: teeth contact on the flanks only
    Side,
    /// Major-diameter fit: centered on the major diameter
    Diameter,
}

impl FitType {
    fn parse(raw: &str) -> SplineResult<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "SIDE" => Ok(FitType::Side),
            "DIA" | "MAJOR" | "DIAMETER" => Ok(FitType::Diameter),
            _ => Err(SplineError::invalid_input("fit", raw, "Expected SIDE or DIA")),
        }
    }

    /// Designation code
    pub fn code(&self) -> &'static str {
        match self {
            FitType::Side => "SIDE",
            FitType::Diameter => "DIA",
        }
    }
}

/// ISO 4156 fundamental deviation letter.
///
/// Lower-case letters apply to external splines, `H` to internal ones.
/// Unknown letters are carried through so the deviation lookup can reject
/// them with a precise error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitLetter {
    D,
    E,
    F,
    LowerH,
    UpperH,
    Js,
    K,
    Other(String),
}

impl FitLetter {
    /// Parse a fit letter (case sensitive, `h` and `H` differ)
    pub fn parse(raw: &str) -> Self {
        match raw {
            "d" => FitLetter::D,
            "e" => FitLetter::E,
            "f" => FitLetter::F,
            "h" => FitLetter::LowerH,
            "H" => FitLetter::UpperH,
            "js" => FitLetter::Js,
            "k" => FitLetter::K,
            other => FitLetter::Other(other.to_string()),
        }
    }

    /// Designation letter(s)
    pub fn as_str(&self) -> &str {
        match self {
            FitLetter::D => "d",
            FitLetter::E => "e",
            FitLetter::F => "f",
            FitLetter::LowerH => "h",
            FitLetter::UpperH => "H",
            FitLetter::Js => "js",
            FitLetter::K => "k",
            FitLetter::Other(s) => s.as_str(),
        }
    }

    /// `js` and `k` have no tabulated deviation; it follows from the tolerance
    pub fn is_tolerance_derived(&self) -> bool {
        matches!(self, FitLetter::Js | FitLetter::K)
    }
}

impl std::fmt::Display for FitLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Per-Standard Specifications
// ============================================================================

/// ISO 4156 spline specification (millimeters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoSpecification {
    /// External or internal
    pub kind: SplineKind,
    /// Number of teeth z
    pub teeth: u32,
    /// Module m
    pub module: Millimeters,
    /// Pressure angle α_D in degrees
    pub pressure_angle_deg: f64,
    /// Root form (`R`/`P` after the angle); optional at 37.5° and 45°
    pub root: Option<RootType>,
    /// Tolerance grade 4..=7
    pub grade: u8,
    /// Fundamental deviation letter
    pub fit: FitLetter,
    /// Spline length used by the helix deviation; half the pitch diameter when absent
    pub reference_length: Option<Millimeters>,
}

impl IsoSpecification {
    /// Pitch diameter D = z·m
    pub fn pitch_diameter(&self) -> f64 {
        self.teeth as f64 * self.module.value()
    }

    /// Reference length g, defaulting to D/2
    pub fn reference_length(&self) -> f64 {
        self.reference_length
            .map(Millimeters::value)
            .unwrap_or_else(|| self.pitch_diameter() / 2.0)
    }

    fn parse(designation: &str, fields: &[&str]) -> SplineResult<Self> {
        let [kind, teeth, module, angle, tolerance] =
            expect_fields::<5>(designation, fields, Standard::Iso4156)?;

        let (module_number, module_suffix) = split_suffix(module);
        if !matches!(module_suffix, "" | "m" | "M") {
            return Err(SplineError::invalid_input(
                "module",
                module,
                "Expected a module such as 1,0m",
            ));
        }

        let (angle_number, root_marker) = split_suffix(angle);
        let root = match root_marker {
            "" => None,
            marker => Some(RootType::parse(marker)?),
        };

        let (grade, fit) = parse_grade(tolerance)?;
        if fit.is_empty() {
            return Err(SplineError::malformed(
                designation,
                "Tolerance field needs a fit letter, e.g. 5H",
            ));
        }

        Ok(IsoSpecification {
            kind: SplineKind::parse(kind)?,
            teeth: parse_teeth(teeth)?,
            module: Millimeters(parse_positive("module", module_number)?),
            pressure_angle_deg: parse_positive("pressure_angle", angle_number)?,
            root,
            grade,
            fit: FitLetter::parse(fit),
            reference_length: None,
        })
    }
}

/// ANSI B92.1 spline specification (inches).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsiSpecification {
    /// External or internal
    pub kind: SplineKind,
    /// Root form
    pub root: RootType,
    /// Side or major-diameter fit
    pub fit: FitType,
    /// Diametral pitch P (teeth per inch of pitch diameter)
    pub diametral_pitch: f64,
    /// Stub pitch Ps (controls tooth depth), conventionally 2P
    pub stub_pitch: Option<f64>,
    /// Number of teeth N
    pub teeth: u32,
    /// Pressure angle φ_D in degrees
    pub pressure_angle_deg: f64,
    /// Tolerance class 4..=7
    pub class: u8,
}

impl AnsiSpecification {
    /// Pitch diameter D = N/P
    pub fn pitch_diameter(&self) -> f64 {
        self.teeth as f64 / self.diametral_pitch
    }

    /// Stub pitch, defaulting to twice the diametral pitch
    pub fn stub_pitch(&self) -> f64 {
        self.stub_pitch.unwrap_or(2.0 * self.diametral_pitch)
    }

    fn parse(designation: &str, fields: &[&str]) -> SplineResult<Self> {
        let [kind, root, fit, pitch, teeth, angle, class] =
            expect_fields::<7>(designation, fields, Standard::AnsiB92)?;
        let (diametral_pitch, stub_pitch) = parse_pitch(pitch)?;
        let (class_number, trailing) = parse_grade(class)?;
        if !trailing.is_empty() {
            return Err(SplineError::invalid_input("class", class, "Expected a class number"));
        }

        Ok(AnsiSpecification {
            kind: SplineKind::parse(kind)?,
            root: RootType::parse(root)?,
            fit: FitType::parse(fit)?,
            diametral_pitch,
            stub_pitch,
            teeth: parse_teeth(teeth)?,
            pressure_angle_deg: parse_positive("pressure_angle", angle)?,
            class: class_number,
        })
    }
}

/// BS 3550 spline specification (inches). Recognized, not derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BsSpecification {
    pub kind: SplineKind,
    pub root: RootType,
    pub fit: FitType,
    pub diametral_pitch: f64,
    pub stub_pitch: Option<f64>,
    pub teeth: u32,
    pub pressure_angle_deg: f64,
}

impl BsSpecification {
    fn parse(designation: &str, fields: &[&str]) -> SplineResult<Self> {
        let [kind, root, fit, pitch, teeth, angle] =
            expect_fields::<6>(designation, fields, Standard::Bs3550)?;
        let (diametral_pitch, stub_pitch) = parse_pitch(pitch)?;

        Ok(BsSpecification {
            kind: SplineKind::parse(kind)?,
            root: RootType::parse(root)?,
            fit: FitType::parse(fit)?,
            diametral_pitch,
            stub_pitch,
            teeth: parse_teeth(teeth)?,
            pressure_angle_deg: parse_positive("pressure_angle", angle)?,
        })
    }
}

// ============================================================================
// Tagged Specification
// ============================================================================

/// A parsed spline designation, one variant per standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "standard")]
pub enum SplineSpecification {
    Iso(IsoSpecification),
    Ansi(AnsiSpecification),
    Bs(BsSpecification),
}

impl SplineSpecification {
    /// Parse a designation string.
    pub fn parse(designation: &str) -> SplineResult<Self> {
        let standard = detect_standard(designation);
        let fields = tokenize(designation);

        let spec = match standard {
            Standard::Iso4156 => {
                SplineSpecification::Iso(IsoSpecification::parse(designation, &fields)?)
            }
            Standard::AnsiB92 => {
                SplineSpecification::Ansi(AnsiSpecification::parse(designation, &fields)?)
            }
            Standard::Bs3550 => {
                SplineSpecification::Bs(BsSpecification::parse(designation, &fields)?)
            }
        };
        debug!(?spec, "parsed spline designation");
        Ok(spec)
    }

    /// Override the ISO reference length; other standards ignore it.
    pub fn with_reference_length(mut self, length: Option<Millimeters>) -> Self {
        if let SplineSpecification::Iso(iso) = &mut self {
            iso.reference_length = length;
        }
        self
    }

    /// Standard this specification belongs to
    pub fn standard(&self) -> Standard {
        match self {
            SplineSpecification::Iso(_) => Standard::Iso4156,
            SplineSpecification::Ansi(_) => Standard::AnsiB92,
            SplineSpecification::Bs(_) => Standard::Bs3550,
        }
    }

    /// External or internal
    pub fn kind(&self) -> SplineKind {
        match self {
            SplineSpecification::Iso(s) => s.kind,
            SplineSpecification::Ansi(s) => s.kind,
            SplineSpecification::Bs(s) => s.kind,
        }
    }

    /// Number of teeth
    pub fn teeth(&self) -> u32 {
        match self {
            SplineSpecification::Iso(s) => s.teeth,
            SplineSpecification::Ansi(s) => s.teeth,
            SplineSpecification::Bs(s) => s.teeth,
        }
    }

    /// Pressure angle in degrees
    pub fn pressure_angle_deg(&self) -> f64 {
        match self {
            SplineSpecification::Iso(s) => s.pressure_angle_deg,
            SplineSpecification::Ansi(s) => s.pressure_angle_deg,
            SplineSpecification::Bs(s) => s.pressure_angle_deg,
        }
    }
}

impl std::str::FromStr for SplineSpecification {
    type Err = SplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SplineSpecification::parse(s)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn expect_fields<'a, const N: usize>(
    designation: &str,
    fields: &[&'a str],
    standard: Standard,
) -> SplineResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(fields).map_err(|_| {
        SplineError::malformed(
            designation,
            format!("{} designation needs {} fields, found {}", standard, N, fields.len()),
        )
    })
}

/// Parse `P/Ps` or a bare `P`.
fn parse_pitch(raw: &str) -> SplineResult<(f64, Option<f64>)> {
    match raw.split_once('/') {
        Some((pitch, stub)) => Ok((
            parse_positive("diametral_pitch", pitch)?,
            Some(parse_positive("stub_pitch", stub)?),
        )),
        None => Ok((parse_positive("diametral_pitch", raw)?, None)),
    }
}
