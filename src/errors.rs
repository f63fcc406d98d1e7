/*!
 * Error types for the yalt application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling a translation provider
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
}

/// Errors found while loading or validating the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric pipeline setting was zero
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    /// A setting was below its allowed minimum
    #[error("{field} must be at least {minimum}")]
    BelowMinimum {
        /// Setting name
        field: &'static str,
        /// Smallest accepted value
        minimum: u64,
    },

    /// A required string setting was empty
    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    /// The configuration file is not valid JSON for `Config`
    #[error("Failed to parse config file: {0}")]
    Parse(String),
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

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
