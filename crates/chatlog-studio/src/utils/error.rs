//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in the binary and commands.
//!
//! The transcript parser itself has no error type: malformed lines are
//! absorbed or dropped, never reported.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while loading a transcript from disk
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read transcript: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Transcript is too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
}

/// Errors that can occur while loading a TOML config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Errors raised by caller-facing analytics helpers
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Unknown time range: {0} (expected one of 30D, 3M, YTD, 12M, ALL)")]
    UnknownTimeRange(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
