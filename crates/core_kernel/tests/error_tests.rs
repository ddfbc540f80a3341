//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_unsupported() {
    let error = CoreError::unsupported("statement format", "pdf");

    match &error {
        CoreError::Unsupported { kind, value } => {
            assert_eq!(*kind, "statement format");
            assert_eq!(value, "pdf");
        }
        _ => panic!("Expected Unsupported error"),
    }
    assert_eq!(error.to_string(), "Unsupported statement format: pdf");
}

#[test]
fn test_core_error_display() {
    let error = CoreError::validation("Test error");
    let display = format!("{}", error);

    assert!(display.contains("Validation error"));
}
