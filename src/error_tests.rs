//! Tests for SearchError type

use super::*;

#[test]
fn test_invalid_base_url_display() {
    let error = SearchError::InvalidBaseUrl {
        url: "not a url".to_string(),
        reason: "relative URL without a base".to_string(),
    };
    let msg = error.to_string();
    assert!(msg.contains("not a url"));
    assert!(msg.contains("relative URL"));
}

#[test]
fn test_status_error_display() {
    let msg = SearchError::Status(503).to_string();
    assert!(msg.contains("HTTP 503"));
}

#[test]
fn test_parse_error_display() {
    let msg = SearchError::Parse("expected value at line 1".to_string()).to_string();
    assert!(msg.contains("Malformed"));
    assert!(msg.contains("expected value"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = SearchError::from(io_err);
    assert!(matches!(err, SearchError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_debug() {
    let debug_str = format!("{:?}", SearchError::Network("refused".to_string()));
    assert!(debug_str.contains("Network"));
}
