//! Error handling module
//!
//! This module provides centralized error handling for the client.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Network, timeout or connection failure reported by the transport.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The node reported `error` in its response envelope. Displays the
    /// remote text verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("Failed to decode {method} result: {reason}")]
    Decode { method: String, reason: String },

    #[error("unable to get the balance of object: {object_id} ({reason})")]
    Extraction { object_id: String, reason: String },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a decode error for the given RPC method
    pub fn decode(method: &str, reason: impl ToString) -> Self {
        AppError::Decode {
            method: method.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build an extraction error naming the offending object
    pub fn extraction(object_id: impl ToString, reason: impl ToString) -> Self {
        AppError::Extraction {
            object_id: object_id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Remote error text, if the node rejected the call
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            AppError::Remote(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the failure happened below the RPC layer
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Cancelled)
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Transport(format!("request timed out: {}", err))
        } else {
            AppError::Transport(err.to_string())
        }
    }
}
