//! End-to-end designation scenarios and cross-cutting properties.

use std::sync::Arc;
use std::thread;

use spline_core::calculations::{ExternalDimensions, InternalDimensions};
use spline_core::{calculate, SplineCalculator, SplineDimensions, SplineSpecification};

fn close(actual: f64, expected: f64, tol: f64) {
    assert!((actual - expected).abs() < tol, "expected {}, got {}", expected, actual);
}

fn external(designation: &str) -> ExternalDimensions {
    match calculate(designation).unwrap() {
        SplineDimensions::External(ext) => ext,
        SplineDimensions::Internal(_) => panic!("{} should be external", designation),
    }
}

fn internal(designation: &str) -> InternalDimensions {
    match calculate(designation).unwrap() {
        SplineDimensions::Internal(int) => int,
        SplineDimensions::External(_) => panic!("{} should be internal", designation),
    }
}

#[test]
fn iso_internal_flat_root() {
    let int = internal("INT 25z 1.0m 30P 5H");
    close(int.geometry.pitch_diameter, 25.0, 5e-5);
    close(int.geometry.base_diameter, 21.6506, 5e-5);
    close(int.max_major_diameter, 26.74, 5e-3);
    close(int.min_form_diameter, 26.20, 5e-3);
    close(int.min_minor_diameter, 24.09, 5e-3);
}

#[test]
fn iso_external_flat_root() {
    let ext = external("EXT 25z 1.0m 30P 4h");
    close(ext.geometry.pitch_diameter, 25.0, 5e-5);
    close(ext.geometry.base_diameter, 21.6506, 5e-5);
    close(ext.max_major_diameter, 26.00, 5e-3);
    close(ext.max_form_diameter, 23.89, 5e-3);
    close(ext.min_minor_diameter, 23.26, 5e-3);
    close(ext.max_effective_thickness, 1.571, 5e-4);
}

#[test]
fn iso_external_js_fit() {
    let ext = external("EXT 25z 1.0m 30P 5js");
    close(ext.max_major_diameter, 26.00, 5e-3);
    close(ext.max_form_diameter, 23.93, 5e-3);
    close(ext.min_minor_diameter, 23.31, 5e-3);
}

#[test]
fn ansi_external_side_fit() {
    let ext = external("EXT FLAT SIDE 12/24 30T 30 class 5");
    close(ext.geometry.pitch_diameter, 2.5, 5e-7);
    close(ext.geometry.base_diameter, 2.165_064, 5e-7);
}

#[test]
fn iso_designation_with_separators_and_keywords() {
    let plain = calculate("EXT 25z 1.0m 30P 4h").unwrap();
    let written = calculate("EXT 25z x 1,0m x 30P x 4h - ISO 4156").unwrap();
    assert_eq!(plain, written);
}

#[test]
fn actual_sizes_lie_inside_effective_sizes() {
    let designations = [
        "EXT 25z 1m 30P 4h",
        "EXT 25z 1m 30R 6e",
        "EXT 24z 2m 37.5 5f",
        "EXT 31z 1.25m 45 7d",
        "EXT 25z 1m 30P 5k",
        "INT 25z 1m 30P 5H",
        "INT 18z 3m 37.5 7H",
        "EXT FLAT SIDE 12/24 30T 30 class 5",
        "INT FILLET SIDE 8/16 17T 30 class 7",
        "INT FLAT SIDE 5/10 40T 45 class 4",
    ];
    for designation in designations {
        match calculate(designation).unwrap() {
            SplineDimensions::External(ext) => {
                assert!(ext.max_actual_thickness <= ext.max_effective_thickness, "{}", designation);
                assert!(ext.min_actual_thickness <= ext.min_effective_thickness, "{}", designation);
                assert!(
                    ext.min_measurement_over_pins < ext.max_measurement_over_pins,
                    "{}",
                    designation
                );
                assert!(ext.min_minor_diameter < ext.max_form_diameter, "{}", designation);
            }
            SplineDimensions::Internal(int) => {
                assert!(int.max_actual_width >= int.max_effective_width, "{}", designation);
                assert!(int.min_actual_width >= int.min_effective_width, "{}", designation);
                assert!(
                    int.min_measurement_between_pins < int.max_measurement_between_pins,
                    "{}",
                    designation
                );
                assert!(int.min_major_diameter < int.max_major_diameter, "{}", designation);
            }
        }
    }
}

#[test]
fn base_diameter_follows_pressure_angle() {
    for designation in ["EXT 12z 0.5m 30R 5f", "INT 60z 4m 45 6H", "EXT 100z 5m 37.5 4h"] {
        let spec = SplineSpecification::parse(designation).unwrap();
        let result = SplineCalculator::new().calculate(&spec).unwrap();
        let geometry = result.geometry();
        let expected = geometry.pitch_diameter * spec.pressure_angle_deg().to_radians().cos();
        assert!((geometry.base_diameter - expected).abs() < 1e-9, "{}", designation);
    }
}

#[test]
fn pitch_diameter_limit() {
    // 40 teeth x 25 mm = 1000 mm sits in the last interval
    assert!(calculate("EXT 40z 25m 30P 5h").is_ok());

    let mut spec = SplineSpecification::parse("EXT 40z 25m 30P 5h").unwrap();
    if let SplineSpecification::Iso(iso) = &mut spec {
        iso.module = spline_core::units::Millimeters(1000.0001 / 40.0);
    }
    let err = SplineCalculator::new().calculate(&spec).unwrap_err();
    assert_eq!(err.error_code(), "OUT_OF_RANGE");
}

#[test]
fn js_deviation_is_shared_across_threads() {
    let calculator = Arc::new(SplineCalculator::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let calculator = Arc::clone(&calculator);
            thread::spawn(move || {
                calculator
                    .calculate_designation("EXT 25z 1m 30P 5js")
                    .unwrap()
                    .dimensions
            })
        })
        .collect();

    let results: Vec<SplineDimensions> =
        handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(calculator.deviations().synthesized_len(), 1);

    // ceil(55.03 / 2) µm on top of the basic thickness
    let ext = results[0].as_external().unwrap();
    close(ext.max_effective_thickness - 0.5 * std::f64::consts::PI, 0.028, 1e-12);
}

#[test]
fn error_taxonomy() {
    let cases = [
        ("EXT 25z 1m 30P", "MALFORMED_SPECIFICATION"),
        ("EXT 25z 1m 30P 9h", "UNSUPPORTED_TOLERANCE_GRADE"),
        ("EXT 25z 1m 20P 5h", "UNSUPPORTED_PRESSURE_ANGLE"),
        ("EXT 25z 1m 30P 5g", "UNSUPPORTED_FIT"),
        ("EXT FLAT SIDE 16/32 24T 30 BS 3550", "NOT_IMPLEMENTED"),
        ("EXT 0z 1m 30P 5h", "INVALID_INPUT"),
    ];
    for (designation, code) in cases {
        let err = calculate(designation).unwrap_err();
        assert_eq!(err.error_code(), code, "{}", designation);
    }
}

#[test]
fn negative_reference_length_is_rejected_before_derivation() {
    let calculator = SplineCalculator::new();
    let spec = SplineSpecification::parse("EXT 25z 1m 30P 5h")
        .unwrap()
        .with_reference_length(Some(spline_core::units::Millimeters(-10.0)));

    let err = calculator.calculate(&spec).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");

    let accepted = spec.with_reference_length(Some(spline_core::units::Millimeters(10.0)));
    let ext = calculator.calculate(&accepted).unwrap();
    assert!(ext.as_external().unwrap().max_measurement_over_pins.is_finite());
}
