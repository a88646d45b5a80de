//! Unified application error type.
//! Store, engine, cli and utils all return AppError so that the CLI layer
//! can decide in one place what is a warning and what is fatal.

use chrono::NaiveDateTime;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Clock state machine
    // ---------------------------
    #[error("Already clocked in since {}", .since.format("%Y-%m-%d %H:%M:%S"))]
    AlreadyActive { since: NaiveDateTime },

    #[error("Not currently clocked in")]
    NotActive,

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Failed to save punches to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid wage: {0}")]
    InvalidWage(String),

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Expected user misuse of the punch clock: reported, never fatal.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::AlreadyActive { .. } | AppError::NotActive)
    }
}

pub type AppResult<T> = Result<T, AppError>;
