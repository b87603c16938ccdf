//! Configuration and constants for the CLI.
//!
//! Defaults live here as constants. An optional TOML file can override them:
//!
//! ```toml
//! [analysis]
//! range = "12M"
//! top_senders = 10
//!
//! [digest]
//! days = 14
//! max_chars = 40000
//!
//! [input]
//! max_bytes = 10485760
//! ```

use crate::aggregator::TimeRange;
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Number of senders shown on leaderboards
pub const DEFAULT_TOP_SENDERS: usize = 5;

/// History window handed to the AI digest
pub const DEFAULT_DIGEST_DAYS: i64 = 30;

/// Character budget for the AI digest text
pub const DEFAULT_DIGEST_MAX_CHARS: usize = 80_000;

/// Largest transcript accepted by the commands (64 MiB)
pub const DEFAULT_MAX_TRANSCRIPT_BYTES: u64 = 64 * 1024 * 1024;

/// Complete analysis configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub analysis: AnalysisSection,

    #[serde(default)]
    pub digest: DigestSection,

    #[serde(default)]
    pub input: InputSection,
}

/// Report-building settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Time range for the activity series
    pub range: TimeRange,

    /// Leaderboard length
    pub top_senders: usize,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            range: TimeRange::AllTime,
            top_senders: DEFAULT_TOP_SENDERS,
        }
    }
}

/// AI digest settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DigestSection {
    pub days: i64,
    pub max_chars: usize,
}

impl Default for DigestSection {
    fn default() -> Self {
        Self {
            days: DEFAULT_DIGEST_DAYS,
            max_chars: DEFAULT_DIGEST_MAX_CHARS,
        }
    }
}

/// Transcript loading limits
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputSection {
    pub max_bytes: u64,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_TRANSCRIPT_BYTES,
        }
    }
}

/// Load analysis configuration from a TOML file
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * `ConfigError::InvalidValue` - If a value is out of range
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config: AnalysisConfig = toml::from_str(&contents)?;
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.analysis.top_senders == 0 {
        return Err(ConfigError::InvalidValue(
            "analysis.top_senders must be greater than 0".to_string(),
        ));
    }

    if config.digest.days < 0 {
        return Err(ConfigError::InvalidValue(
            "digest.days cannot be negative".to_string(),
        ));
    }

    if config.digest.max_chars == 0 {
        return Err(ConfigError::InvalidValue(
            "digest.max_chars must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
