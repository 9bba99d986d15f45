//! Behaviour of `evaluate_scientific` as seen by callers

use abacus_runtime::{DomainReason, ErrorKind, evaluate_scientific};

fn assert_close(operation: &str, value: f64, expected: f64) {
    let actual = evaluate_scientific(operation, value)
        .unwrap_or_else(|error| panic!("{operation}({value}) should succeed, got error: {error}"));
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{operation}({value}) = {actual}, expected {expected}"
    );
}

#[test]
fn every_operation() {
    assert_close("sin", 90.0, 1.0);
    assert_close("cos", 180.0, -1.0);
    assert_close("tan", 0.0, 0.0);
    assert_close("sqrt", 16.0, 4.0);
    assert_close("log", 100.0, 2.0);
    assert_close("ln", std::f64::consts::E, 1.0);
    assert_close("square", 1.5, 2.25);
    assert_close("factorial", 5.0, 120.0);
    assert_close("abs", -2.5, 2.5);
    assert_close("ceil", 2.1, 3.0);
    assert_close("floor", 2.9, 2.0);
}

#[test]
fn sqrt_of_negative() {
    assert_eq!(
        evaluate_scientific("sqrt", -1.0),
        Err(ErrorKind::DomainError {
            reason: DomainReason::NegativeSquareRoot
        })
    );
}

#[test]
fn factorial_of_fraction() {
    assert_eq!(
        evaluate_scientific("factorial", 3.5),
        Err(ErrorKind::DomainError {
            reason: DomainReason::FactorialNotNonNegativeInteger
        })
    );
}

#[test]
fn factorial_too_large() {
    assert_eq!(
        evaluate_scientific("factorial", 1000.0),
        Err(ErrorKind::Overflow)
    );
}

#[test]
fn log_of_zero() {
    assert_eq!(
        evaluate_scientific("log", 0.0),
        Err(ErrorKind::DomainError {
            reason: DomainReason::NonPositiveLog
        })
    );
    assert_eq!(
        evaluate_scientific("ln", 0.0),
        Err(ErrorKind::DomainError {
            reason: DomainReason::NonPositiveLn
        })
    );
}

#[test]
fn unknown_operation() {
    assert_eq!(
        evaluate_scientific("bogus", 1.0),
        Err(ErrorKind::UnknownOperation {
            name: "bogus".to_string()
        })
    );
    assert_eq!(
        evaluate_scientific("Sqrt", 4.0),
        Err(ErrorKind::UnknownOperation {
            name: "Sqrt".to_string()
        })
    );
}

#[test]
fn error_messages() {
    let cases = [
        (("sqrt", -4.0), "cannot calculate square root of negative number"),
        (("log", -1.0), "cannot calculate log of non-positive number"),
        (("ln", -1.0), "cannot calculate ln of non-positive number"),
        (("factorial", -1.0), "factorial only defined for non-negative integers"),
        (("factorial", 200.0), "result too large to calculate"),
        (("nope", 1.0), "unknown operation `nope`"),
    ];

    for ((operation, value), message) in cases {
        let error = evaluate_scientific(operation, value)
            .expect_err("operation should fail");
        assert_eq!(error.to_string(), message);
    }
}
