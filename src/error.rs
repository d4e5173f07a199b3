//! Error types for the `RainOrShine` crate
//!
//! Classification itself never fails; these cover configuration, payload
//! parsing and I/O around it.

use thiserror::Error;

/// Main error type for the `RainOrShine` crate
#[derive(Error, Debug)]
pub enum RainOrShineError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather payload could not be parsed
    #[error("Payload error: {message}")]
    Payload { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RainOrShineError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new payload error
    pub fn payload<S: Into<String>>(message: S) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            Self::Payload { .. } => {
                "The weather data could not be read. Please check the payload format.".to_string()
            }
            Self::Validation { message } => format!("Invalid input: {message}"),
            Self::Io { .. } => "File operation failed. Please check file permissions.".to_string(),
        }
    }
}

impl From<serde_json::Error> for RainOrShineError {
    fn from(err: serde_json::Error) -> Self {
        Self::payload(err.to_string())
    }
}
