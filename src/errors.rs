//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Time parsing errors
    // ---------------------------
    #[error("Time string is empty")]
    EmptyTimeString,

    #[error("Invalid time format: '{0}' (expected HH:mm)")]
    InvalidTimeFormat(String),

    #[error("Time out of range: '{0}'")]
    TimeOutOfRange(String),

    /// A time error tied to the parameter it was read from.
    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidInput { field: String, message: String },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown shift preset: {0}")]
    UnknownPreset(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Attach the name of the parameter that produced this error.
    pub fn for_field(self, field: &str) -> Self {
        AppError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for bad-request errors (caller supplied bad input),
    /// false for internal faults.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::EmptyTimeString
            | AppError::InvalidTimeFormat(_)
            | AppError::TimeOutOfRange(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidInput { .. }
            | AppError::UnknownPreset(_) => true,
            AppError::Field { source, .. } => source.is_client_error(),
            _ => false,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
