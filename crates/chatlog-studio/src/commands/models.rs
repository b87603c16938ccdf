use crate::aggregator::TimeRange;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
///
/// `None` fields fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Exported transcript to read
    pub input: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Time range for the activity series
    pub range: Option<TimeRange>,

    /// Leaderboard length
    pub top_senders: Option<usize>,

    /// Narrow the activity series to one sender
    pub sender: Option<String>,

    /// First day to include (inclusive)
    pub from: Option<NaiveDate>,

    /// Last day to include (inclusive)
    pub to: Option<NaiveDate>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Optional TOML config file
    pub config_path: Option<PathBuf>,

    /// Last day covered by the activity series (None = local today)
    pub today: Option<NaiveDate>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("chat.txt"),
            output_json: Some(PathBuf::from("report.json")),
            range: None,
            top_senders: None,
            sender: None,
            from: None,
            to: None,
            print_summary: false,
            config_path: None,
            today: None,
        }
    }
}

/// Arguments for the digest command
#[derive(Debug, Clone)]
pub struct DigestArgs {
    /// Exported transcript to read
    pub input: PathBuf,

    /// Output path for the digest JSON (None = print text to stdout)
    pub output_json: Option<PathBuf>,

    /// Days of history before the latest message
    pub days: Option<i64>,

    /// Character budget for the digest text
    pub max_chars: Option<usize>,

    /// Optional TOML config file
    pub config_path: Option<PathBuf>,
}

impl Default for DigestArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("chat.txt"),
            output_json: None,
            days: None,
            max_chars: None,
            config_path: None,
        }
    }
}
