//! Core error types for the Wanderplan application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the trip planner.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Itinerary error: {0}")]
    Itinerary(#[from] ItineraryError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for the database connection.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Filesystem problem while preparing the database location.
    #[error("Database location unavailable: {0}")]
    Io(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("New passwords don't match")]
    PasswordMismatch,

    #[error("Failed to parse date '{value}': {reason}")]
    DateParse { value: String, reason: String },

    #[error("Failed to parse number '{0}'")]
    NumberParse(String),
}

impl ValidationError {
    pub fn date_parse(value: &str, err: ChronoParseError) -> Self {
        ValidationError::DateParse {
            value: value.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors raised by the itinerary edit protocol.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItineraryError {
    #[error("Activity {0} does not exist in this itinerary")]
    ActivityNotFound(u32),

    #[error("Activity {0} is not open in the editor")]
    EditorNotOpen(u32),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Database(DatabaseError::Io(err.to_string()))
    }
}
