//! Unit tests for domain error types

use wireup_domain::{Error, TypeDescriptor};

struct Foo;
struct Bar;

#[test]
fn test_registration_error() {
    let error = Error::registration("new_foo", "is not invocable");
    match &error {
        Error::Registration {
            constructor,
            message,
        } => {
            assert_eq!(constructor, "new_foo");
            assert_eq!(message, "is not invocable");
        }
        _ => panic!("Expected Registration error"),
    }
    assert!(error.is_wiring_error());
    assert!(error.offending_type().is_none());
}

#[test]
fn test_missing_dependency_names_type() {
    let error = Error::missing_dependency(TypeDescriptor::of::<Bar>());
    let display = error.to_string();
    assert!(display.starts_with("No constructor defined for type"));
    assert!(display.contains("Bar"));
    assert_eq!(error.offending_type(), Some(TypeDescriptor::of::<Bar>()));
}

#[test]
fn test_cycle_error_names_both_endpoints() {
    let error = Error::cycle(TypeDescriptor::of::<Foo>(), TypeDescriptor::of::<Bar>());
    match &error {
        Error::Cycle {
            parameter,
            dependent,
        } => {
            assert_eq!(*parameter, TypeDescriptor::of::<Foo>());
            assert_eq!(*dependent, TypeDescriptor::of::<Bar>());
        }
        _ => panic!("Expected Cycle error"),
    }
    let display = error.to_string();
    assert!(display.contains("Foo"));
    assert!(display.contains("Bar"));
}

#[test]
fn test_ambiguous_error_reports_candidates() {
    let error = Error::ambiguous(TypeDescriptor::of::<Bar>(), 2);
    assert!(error.to_string().contains("2 candidates"));
    assert!(error.is_wiring_error());
}

#[test]
fn test_non_wiring_errors() {
    assert!(!Error::config("bad level").is_wiring_error());
    assert!(!Error::type_mismatch("Foo", "Bar").is_wiring_error());

    let io = std::io::Error::other("disk gone");
    let error = Error::io_with_source("Failed to write", io);
    assert!(std::error::Error::source(&error).is_some());
}
