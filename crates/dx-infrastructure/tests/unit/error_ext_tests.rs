//! Error Extension Tests

use dx_domain::error::{Error, Result};
use dx_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<u16> = "not a port"
        .parse::<u16>()
        .config_context("invalid port setting");

    match result {
        Err(Error::Configuration { message, source }) => {
            assert!(message.starts_with("invalid port setting: "));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_parse_context() {
    let result: Result<serde_json::Value> =
        serde_json::from_str::<serde_json::Value>("{").parse_context("job.json");

    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[test]
fn test_lazy_context_is_internal() {
    let io_error = io::Error::other("boom");

    let result: Result<()> = Err(io_error).with_context(|| format!("step {}", 3));
    match result {
        Err(Error::Internal { message }) => assert_eq!(message, "step 3: boom"),
        other => panic!("Expected Internal error, got {other:?}"),
    }
}

#[test]
fn test_context_passes_ok_through() {
    let ok: std::result::Result<i32, io::Error> = Ok(7);
    assert_eq!(ok.context("unused").unwrap(), 7);
}
