//! Error Extension Tests

use std::io;

use wireup_domain::error::Error;
use wireup_infrastructure::error_ext::ErrorContext;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_context_wraps_as_configuration_error() {
    let err = failing_io().context("Loading settings").err();
    match err {
        Some(Error::Configuration { message, source }) => {
            assert_eq!(message, "Loading settings: missing file");
            assert!(source.is_some());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .expect("success passes through");
    assert_eq!(value, 7);

    let err = failing_io().with_context(|| format!("attempt {}", 2)).err();
    assert!(matches!(err, Some(Error::Configuration { .. })));
}

#[test]
fn test_io_context_wraps_as_io_error() {
    let err = failing_io().io_context("Reading wireup.toml").err();
    match err {
        Some(Error::Io { message, .. }) => assert!(message.starts_with("Reading wireup.toml")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_config_context_is_not_a_wiring_error() {
    let err = failing_io()
        .config_context("Parsing")
        .err()
        .expect("error is wrapped");
    assert!(!err.is_wiring_error());
}
