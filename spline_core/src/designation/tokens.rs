//! Tokenizer for spline designation strings.
//!
//! A designation is split on whitespace; standalone `x`/`-` separators and
//! the standard-name keywords are dropped, leaving the positional fields.

use tracing::debug;

use super::Standard;
use crate::errors::{SplineError, SplineResult};

/// Standalone separator tokens
const SEPARATORS: [&str; 3] = ["x", "-", "×"];

/// Keyword tokens that carry no field value (compared upper-case)
const KEYWORDS: [&str; 13] = [
    "ISO", "4156", "4156-1", "ANSI", "B92", "B92.1", "B92.1M", "ROOT", "FIT", "CLASS", "BS",
    "3550", "3550:1963",
];

/// Split a designation into its value tokens.
///
/// # Example
/// ```rust
/// use spline_core::designation::tokens::tokenize;
///
/// let tokens = tokenize("INT 25z x 1,0m x 30P x 5H - ISO 4156");
/// assert_eq!(tokens, vec!["INT", "25z", "1,0m", "30P", "5H"]);
/// ```
pub fn tokenize(designation: &str) -> Vec<&str> {
    designation
        .split_whitespace()
        .filter(|token| !SEPARATORS.iter().any(|sep| token.eq_ignore_ascii_case(sep)))
        .filter(|token| !is_keyword(token))
        .collect()
}

/// Standard names that may be written glued to their number (`ISO4156`)
const STANDARD_PREFIXES: [&str; 3] = ["ISO", "ANSI", "BS"];

/// Whether `token` is a keyword, on its own or glued after a standard name
fn is_keyword(token: &str) -> bool {
    let upper = token.to_ascii_uppercase();
    if KEYWORDS.contains(&upper.as_str()) {
        return true;
    }
    STANDARD_PREFIXES.iter().any(|prefix| {
        upper
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || KEYWORDS.contains(&rest))
    })
}

/// Detect which standard a designation is written against.
///
/// Standard names are matched as substrings, so `ISO4156` and `BS3550`
/// count. Without one, an ANSI-style `p/ps` pitch token selects ANSI B92.1;
/// anything else is read as ISO 4156.
pub fn detect_standard(designation: &str) -> Standard {
    let upper = designation.to_ascii_uppercase();
    let has = |names: &[&str]| names.iter().any(|name| upper.contains(name));

    let standard = if has(&["ANSI", "B92"]) {
        Standard::AnsiB92
    } else if has(&["BS", "3550"]) {
        Standard::Bs3550
    } else if has(&["ISO", "4156"]) {
        Standard::Iso4156
    } else if upper.contains('/') {
        Standard::AnsiB92
    } else {
        Standard::Iso4156
    };

    debug!(designation, ?standard, "detected spline standard");
    standard
}

/// Parse a real number, accepting `,` as the decimal separator.
pub fn parse_real(field: &str, raw: &str) -> SplineResult<f64> {
    let normalized = raw.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| SplineError::invalid_input(field, raw, "Not a number"))?;
    if !value.is_finite() {
        return Err(SplineError::invalid_input(field, raw, "Value must be finite"));
    }
    Ok(value)
}

/// Parse a strictly positive real number.
pub fn parse_positive(field: &str, raw: &str) -> SplineResult<f64> {
    let value = parse_real(field, raw)?;
    if value <= 0.0 {
        return Err(SplineError::invalid_input(field, raw, "Value must be positive"));
    }
    Ok(value)
}

/// Split a composite token into its leading number and trailing letters.
///
/// `"25z"` gives `("25", "z")`, `"30P"` gives `("30", "P")`,
/// `"5js"` gives `("5", "js")`, `"1,0m"` gives `("1,0", "m")`.
pub fn split_suffix(token: &str) -> (&str, &str) {
    let split_at = token
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == ','))
        .map(|(index, _)| index)
        .unwrap_or(token.len());
    token.split_at(split_at)
}

/// Parse a tooth count token such as `25z` or `30T`.
pub fn parse_teeth(raw: &str) -> SplineResult<u32> {
    let (number, suffix) = split_suffix(raw);
    if !matches!(suffix, "" | "z" | "Z" | "t" | "T") {
        return Err(SplineError::invalid_input(
            "teeth",
            raw,
            "Expected a tooth count such as 25z or 30T",
        ));
    }
    let teeth: u32 = number
        .parse()
        .map_err(|_| {
            SplineError::invalid_input("teeth", raw, "Tooth count must be a whole number")
        })?;
    if teeth == 0 {
        return Err(SplineError::invalid_input("teeth", raw, "Number of teeth must be at least 1"));
    }
    Ok(teeth)
}

/// Parse a tolerance grade/class token, returning the grade and any letters after it.
pub fn parse_grade(raw: &str) -> SplineResult<(u8, &str)> {
    let (number, letters) = split_suffix(raw);
    let grade: u8 = number
        .parse()
        .map_err(|_| {
            SplineError::invalid_input("tolerance_class", raw, "Expected a numeric grade")
        })?;
    Ok((grade, letters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_iso_with_separators() {
        let tokens = tokenize("EXT 25z x 1,0m x 30R x 6e - ISO 4156");
        assert_eq!(tokens, vec!["EXT", "25z", "1,0m", "30R", "6e"]);
    }

    #[test]
    fn test_tokenize_ansi_keywords() {
        let tokens = tokenize("EXT FLAT ROOT SIDE FIT 12/24 30T 30 CLASS 5 ANSI B92");
        assert_eq!(tokens, vec!["EXT", "FLAT", "SIDE", "12/24", "30T", "30", "5"]);
    }

    #[test]
    fn test_tokenize_lowercase_class_keyword() {
        let tokens = tokenize("EXT FLAT SIDE 12/24 30T 30 class 5");
        assert_eq!(tokens, vec!["EXT", "FLAT", "SIDE", "12/24", "30T", "30", "5"]);
    }

    #[test]
    fn test_detect_standard() {
        assert_eq!(detect_standard("INT 25z 1.0m 30P 5H - ISO 4156"), Standard::Iso4156);
        assert_eq!(detect_standard("INT 25z 1.0m 30P 5H"), Standard::Iso4156);
        assert_eq!(detect_standard("EXT FLAT SIDE 12/24 30T 30 class 5"), Standard::AnsiB92);
        assert_eq!(
            detect_standard("EXT FLAT ROOT SIDE FIT 12/24 30T 30 BS 3550"),
            Standard::Bs3550
        );
    }

    #[test]
    fn test_glued_standard_names() {
        assert_eq!(detect_standard("EXT 25z 1m 30P 5h ISO4156"), Standard::Iso4156);
        assert_eq!(detect_standard("EXT FLAT SIDE 12/24 30T 30 5 ANSIB92.1"), Standard::AnsiB92);
        assert_eq!(detect_standard("EXT FLAT SIDE 16/32 24T 30 BS3550"), Standard::Bs3550);
        assert_eq!(tokenize("EXT 25z 1m 30P 5h ISO4156-1"), vec!["EXT", "25z", "1m", "30P", "5h"]);
        assert_eq!(
            tokenize("EXT FLAT SIDE 16/32 24T 30 BS3550"),
            vec!["EXT", "FLAT", "SIDE", "16/32", "24T", "30"]
        );
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(split_suffix("25z"), ("25", "z"));
        assert_eq!(split_suffix("37.5P"), ("37.5", "P"));
        assert_eq!(split_suffix("5js"), ("5", "js"));
        assert_eq!(split_suffix("1,25m"), ("1,25", "m"));
        assert_eq!(split_suffix("45"), ("45", ""));
    }

    #[test]
    fn test_parse_real_decimal_comma() {
        assert_eq!(parse_real("module", "1,25").unwrap(), 1.25);
        assert!(parse_real("module", "abc").is_err());
        assert!(parse_positive("module", "0").is_err());
    }

    #[test]
    fn test_parse_teeth() {
        assert_eq!(parse_teeth("25z").unwrap(), 25);
        assert_eq!(parse_teeth("30T").unwrap(), 30);
        assert!(parse_teeth("0z").is_err());
        assert!(parse_teeth("25q").is_err());
        assert!(parse_teeth("z").is_err());
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("5H").unwrap(), (5, "H"));
        assert_eq!(parse_grade("7").unwrap(), (7, ""));
        assert!(parse_grade("H5").is_err());
    }
}
