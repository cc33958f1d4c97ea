//! Custom error types for truckyard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for truckyard operations
#[derive(Error, Debug)]
pub enum YardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Errors reading or writing one of the CSV files
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for user supplied data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The yard already holds the maximum number of trucks
    #[error("Limit reached: the yard already holds {capacity} trucks")]
    YardFull { capacity: usize },

    /// Exit requested while no truck is inside the yard
    #[error("Empty yard: there are no trucks to check out")]
    YardEmpty,

    /// Standard input was closed while a prompt was waiting
    #[error("Input closed")]
    InputClosed,
}

impl YardError {
    /// Create a "not found" error for a record
    pub fn record_not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the user closed standard input
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for YardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for YardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for YardError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for truckyard operations
pub type YardResult<T> = Result<T, YardError>;
