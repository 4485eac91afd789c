/*!
 * Error types for the potwai application.
 *
 * Each pipeline stage owns one error enum, defined with the thiserror crate.
 * `AppError` wraps them all so the controller can return a single type.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),

    /// A variable is set but its value cannot be used
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Value as found in the environment
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Errors that can occur when reading or parsing a catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be opened or read
    #[error("Cannot read input file '{}': {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The content is not a well-formed PO catalog
    #[error("Malformed catalog '{}': {message}", path.display())]
    Malformed {
        /// File that failed
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },
}

/// Errors that can occur when talking to a completion API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("An API error occurred: {0}")]
    Provider(#[from] ProviderError),

    /// The source strings could not be encoded as a JSON payload
    #[error("Failed to encode source strings: {0}")]
    Payload(String),

    /// The model answered with something other than the expected JSON object
    #[error("Could not decode or parse the AI's response: {reason}\n--- Raw AI Response ---\n{raw}")]
    MalformedResponse {
        /// What was wrong with the body
        reason: String,
        /// Body exactly as received
        raw: String,
    },

    /// The model returned a different number of strings than it was given
    #[error("Mismatch in translation count: expected {expected} translations, but received {received}")]
    CountMismatch {
        /// Number of source strings sent
        expected: usize,
        /// Number of translations received
        received: usize,
    },
}

/// Errors that can occur when refreshing header metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Header values must fit on one line
    #[error("Value for header '{key}' contains a line break: {value:?}")]
    MultiLineValue {
        /// Header key
        key: String,
        /// Rejected value
        value: String,
    },
}

/// Errors that can occur when writing the output catalog
#[derive(Error, Debug)]
#[error("Failed to save the output file '{}': {source}", path.display())]
pub struct PersistError {
    /// Target path
    pub path: PathBuf,
    /// Underlying I/O error
    #[source]
    pub source: std::io::Error,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogRead(#[from] CatalogError),

    /// Translation request failed or produced unusable output
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Output catalog could not be written
    #[error("Persist error: {0}")]
    Persist(#[from] PersistError),
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        Self::Translation(TranslationError::Provider(error))
    }
}
