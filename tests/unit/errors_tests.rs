/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use potwai::errors::{AppError, CatalogError, ConfigError, MetadataError, PersistError, ProviderError, TranslationError};

#[test]
fn test_configError_missingVariable_shouldNameVariable() {
    let error = ConfigError::MissingVariable("OPENAI_API_KEY");
    assert_eq!(error.to_string(), "OPENAI_API_KEY environment variable is not set");
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 500,
        message: "Internal error".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("500"));
    assert!(display.contains("Internal error"));
}

#[test]
fn test_translationError_countMismatch_shouldShowBothCounts() {
    let error = TranslationError::CountMismatch { expected: 3, received: 2 };
    assert_eq!(
        error.to_string(),
        "Mismatch in translation count: expected 3 translations, but received 2"
    );
}

#[test]
fn test_translationError_malformedResponse_shouldEchoRawBody() {
    let error = TranslationError::MalformedResponse {
        reason: "invalid JSON".to_string(),
        raw: "Bonjour!".to_string(),
    };
    let display = error.to_string();
    assert!(display.contains("invalid JSON"));
    assert!(display.ends_with("--- Raw AI Response ---\nBonjour!"));
}

#[test]
fn test_metadataError_shouldNameHeaderKey() {
    let error = MetadataError::MultiLineValue {
        key: "Last-Translator".to_string(),
        value: "a\nb".to_string(),
    };
    assert!(error.to_string().contains("Last-Translator"));
}

#[test]
fn test_catalogError_io_shouldNamePath() {
    let error = CatalogError::Io {
        path: PathBuf::from("missing.po"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };
    assert!(error.to_string().contains("missing.po"));
}

#[test]
fn test_appError_fromProviderError_shouldWrapAsTranslation() {
    let error: AppError = ProviderError::AuthenticationError("bad key".to_string()).into();
    assert!(matches!(
        error,
        AppError::Translation(TranslationError::Provider(ProviderError::AuthenticationError(_)))
    ));
}

#[test]
fn test_appError_fromPersistError_shouldKeepSource() {
    let error: AppError = PersistError {
        path: PathBuf::from("out/fr.po"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
    .into();

    assert!(matches!(error, AppError::Persist(_)));
    let source = std::error::Error::source(&error).unwrap();
    assert!(source.to_string().contains("out/fr.po"));
}
