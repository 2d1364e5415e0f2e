//! Error types for the foss-north tools.

use thiserror::Error;

/// Errors that can occur while building the conference calendar.
#[derive(Error, Debug)]
pub enum FossNorthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not parse schedule: {0}")]
    ScheduleParse(String),

    #[error("Invalid speaker entry #{index}: {reason}")]
    InvalidSpeaker { index: usize, reason: String },

    #[error("foss-north 2025 happens during april 14 and 15, got '{0}'")]
    InvalidDay(String),

    #[error("\"time\" must be a valid hh:mm string, got '{0}'")]
    InvalidTime(String),

    #[error("Invalid slot '{0}', expected something like slot7 or slot13a")]
    InvalidSlot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for foss-north operations.
pub type FossNorthResult<T> = Result<T, FossNorthError>;
