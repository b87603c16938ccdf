use crate::output::read_report;
use crate::utils::config::{load_config, AnalysisConfig, SCHEMA_VERSION};
use crate::utils::error::InputError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a transcript, refusing files above `max_bytes`
///
/// Invalid UTF-8 is replaced rather than rejected; exports from older
/// devices sometimes carry stray bytes.
pub fn load_transcript(path: &Path, max_bytes: u64) -> Result<String, InputError> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(InputError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Load the config file when given, defaults otherwise
pub fn resolve_config(path: Option<&PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => {
            info!("Using config: {}", path.display());
            load_config(path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(AnalysisConfig::default()),
    }
}

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Messages: {}", report.summary.total_messages);
    println!("  Senders: {}", report.summary.total_senders);
    println!("  Months: {}", report.months.len());
    println!("  Range: {} ({} periods)", report.range, report.activity.len());

    if report.version != SCHEMA_VERSION {
        println!(
            "  ⚠ Schema v{} differs from this build (v{})",
            report.version, SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Chatlog Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - Transcript file name");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  summary: object          - Headline statistics");
        println!("    total_messages: number");
        println!("    total_senders: number");
        println!("    total_words: number");
        println!("    day_span: number       - First to last message, inclusive");
        println!("    avg_per_day: number    - Rounded to one decimal");
        println!("  top_senders: array       - {{ name, count }}, most active first");
        println!("  senders: array           - Distinct senders, alphabetical");
        println!("  months: array            - Distinct YYYY-MM keys, newest first");
        println!("  range: string            - 30D | 3M | YTD | 12M | ALL");
        println!("  activity: object         - {{ labels, data }} per period");
        println!("  heatmap: object          - grid[day][hour] (day 0 = Sunday), max");
        println!("  latest_month: object?    - {{ month, senders: {{ labels, data }} }}");
        println!("  sender_timeline: object? - Monthly counts for sender_filter");
        println!("  parse_stats: object      - header/continuation/dropped/blank lines");
        println!("  sender_filter: string?");
        println!("  date_filter: object?     - {{ start, end }}, both inclusive");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Chatlog v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Activity reports for WhatsApp chat exports.");
    println!("https://github.com/chatlog/chatlog");
}
