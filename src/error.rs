//! Error types and handling for Aethon
//!
//! This module defines the error types used throughout the integration,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for Aethon operations
pub type Result<T> = std::result::Result<T, AethonError>;

/// Main error type for Aethon
#[derive(Debug, Error)]
pub enum AethonError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network-level errors (connection, DNS)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Request deadline errors
    #[error("Timeout error: {message}")]
    Timeout { message: String },

    /// Monitoring API errors (HTTP error statuses)
    #[error("API error: {message}")]
    Api { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Generic errors with context
    #[error("Error: {message}")]
    Generic { message: String },
}

impl AethonError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        AethonError::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        AethonError::Network {
            message: message.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(message: S) -> Self {
        AethonError::Timeout {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        AethonError::Api {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        AethonError::Serialization {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        AethonError::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        AethonError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn generic<S: Into<String>>(message: S) -> Self {
        AethonError::Generic {
            message: message.into(),
        }
    }

    /// Whether this error is transient from the host's point of view.
    ///
    /// Transient errors cover everything the monitoring API may recover
    /// from on its own: transport problems and malformed response bodies.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AethonError::Network { .. }
                | AethonError::Timeout { .. }
                | AethonError::Api { .. }
                | AethonError::Serialization { .. }
        )
    }
}

impl From<std::io::Error> for AethonError {
    fn from(err: std::io::Error) -> Self {
        AethonError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for AethonError {
    fn from(err: serde_yaml::Error) -> Self {
        AethonError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AethonError {
    fn from(err: serde_json::Error) -> Self {
        AethonError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for AethonError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AethonError::timeout(err.to_string())
        } else if err.is_connect() {
            AethonError::network(err.to_string())
        } else if err.is_decode() {
            AethonError::serialization(err.to_string())
        } else if err.is_status() {
            AethonError::api(err.to_string())
        } else {
            AethonError::network(err.to_string())
        }
    }
}
