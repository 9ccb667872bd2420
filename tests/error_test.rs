//! Tests for error types

use fusedex::Error;

#[test]
fn test_invalid_input_error() {
    let error = Error::InvalidInput("name must not be empty".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid input"));
    assert!(error_str.contains("name must not be empty"));
}

#[test]
fn test_provider_error() {
    let error = Error::Provider("connection refused".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Provider error"));
    assert!(error_str.contains("connection refused"));
    assert!(error.is_provider());
}

#[test]
fn test_provider_status_error() {
    let error = Error::ProviderStatus { id: 9999, status: 404 };
    let error_str = format!("{error}");
    assert!(error_str.contains("HTTP 404"));
    assert!(error_str.contains("9999"));
    assert!(error.is_provider());
}

#[test]
fn test_store_error() {
    let error = Error::Store("favorite not found".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Store error"));
    assert!(error_str.contains("favorite not found"));
    assert!(!error.is_provider());
}

#[test]
fn test_config_error() {
    let error = Error::Config("page_size must be at least 1".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Config error"));
    assert!(error_str.contains("page_size"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error: Error = io.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
    assert!(error_str.contains("no such file"));
}

#[test]
fn test_json_error_conversion() {
    let json = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let error: Error = json.into();
    assert!(format!("{error}").contains("JSON error"));
}

#[test]
fn test_error_debug() {
    let error = Error::InvalidInput("test".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("InvalidInput"));
}
