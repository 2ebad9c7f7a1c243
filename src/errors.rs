/*!
 * Error types for the yattwai application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with provider APIs
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
        message: String
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

/// Errors that can occur while reading, validating or patching tables
#[derive(Error, Debug)]
pub enum TableError {
    /// Error reading or writing a table file
    #[error("Table I/O error: {0}")]
    Io(String),

    /// Error when a row does not match the table header
    #[error("Row {row} has {found} cells, expected {expected}")]
    ShapeMismatch {
        /// Zero-based row position
        row: usize,
        /// Cells found in the row
        found: usize,
        /// Cells expected from the header
        expected: usize
    },

    /// Error when a named column does not exist
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Error when a requested language has no matching output column
    #[error("No '{column}' column for requested language '{code}'")]
    UnmappedLanguage {
        /// The requested language code
        code: String,
        /// The column name that was expected to exist
        column: String
    },
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error with table processing
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// The job was cancelled before all results were collected
    #[error("Translation job cancelled")]
    Cancelled,

    /// Error while retrieving results from the worker pool
    #[error("Failed to collect worker results: {0}")]
    Collection(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from table processing
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<csv::Error> for TableError {
    fn from(error: csv::Error) -> Self {
        Self::Io(error.to_string())
    }
}
