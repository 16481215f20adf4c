//! Unit tests for domain error types

use std::error::Error as _;

use introspector_domain::{Error, ResolutionError, TypeKey};

#[test]
fn test_factory_not_found_error() {
    let error = Error::factory_not_found("i32");
    match error {
        Error::FactoryNotFound { type_name } => assert_eq!(type_name, "i32"),
        _ => panic!("Expected FactoryNotFound error"),
    }
}

#[test]
fn test_dependency_not_found_is_distinguished() {
    let error = Error::dependency_not_found("app::Clock");
    assert!(error.is_dependency_not_found());
    assert!(!error.is_factory_not_found());
    assert!(!Error::injection("app::Clock", "boom").is_dependency_not_found());
}

#[test]
fn test_generic_error_keeps_message() {
    let error = Error::generic("test error");
    assert_eq!(format!("{error}"), "test error");
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error = Error::configuration_with_source("Failed to load", io);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to load");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_resolution_error_reports_position_and_cause() {
    let error = ResolutionError::new(2, TypeKey::of::<u64>(), Error::factory_not_found("u64"));

    assert_eq!(error.position(), 2);
    assert_eq!(error.type_key(), &TypeKey::of::<u64>());
    assert!(error.cause().is_factory_not_found());
    assert!(error.source().is_some());

    let display = format!("{error}");
    assert!(display.contains("parameter 2"));
    assert!(display.contains("u64"));
}
