/*!
 * Error types for the textlate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation service
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

/// Errors that can occur when working with the buffer store
#[derive(Error, Debug)]
pub enum BufferError {
    /// A buffer with the given name does not exist
    #[error("No buffer named '{0}'")]
    NotFound(String),

    /// A buffer with the given name already exists
    #[error("Buffer '{0}' already exists")]
    AlreadyExists(String),

    /// The name cannot be used as a buffer identity
    #[error("Invalid buffer name: {0}")]
    InvalidName(String),

    /// Error from the underlying storage
    #[error("Buffer storage error: {0}")]
    Storage(String),
}

/// Errors that can occur while executing a translation request
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A language code is not in the registry
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    /// Source and target resolve to the same display name
    #[error("Source and target are both {0}, choose a different target language")]
    SameLanguage(String),

    /// The source text is empty
    #[error("Source text is empty")]
    EmptyInput,

    /// Another translation is already writing to the destination buffer
    #[error("A translation into '{0}' is already in progress")]
    DestinationBusy(String),

    /// Error from the translation service
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the buffer store
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a translation service
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the buffer store
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

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

impl TranslationError {
    /// True for errors caused by user input rather than the environment
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownLanguage(_) | Self::SameLanguage(_) | Self::EmptyInput
        )
    }
}
