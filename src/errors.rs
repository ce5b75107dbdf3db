//! Unified application error type.
//! Store, CLI, export and config code all return AppError so that failures
//! surface through one `Error: ...` line in main.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid entry kind: {0}")]
    InvalidEntryKind(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Logging
    // ---------------------------
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
