//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads config and the transcript
//! 2. Parses the transcript
//! 3. Applies the date filter
//! 4. Builds the report
//! 5. Writes output files

use super::models::AnalyzeArgs;
use super::utils::{load_transcript, resolve_config};
use crate::aggregator::{build_report, date_bounds, filter_by_date_range, ChatReport, DateRange, ReportOptions};
use crate::output::{render_terminal_summary, write_report};
use crate::parser::{parse_with_stats, Message};
use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written and/or printed
///
/// # Errors
/// * Config or transcript read failures
/// * No recognizable messages in the transcript
/// * No messages inside the requested dates
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<ChatReport> {
    let start_time = Instant::now();

    info!("Analyzing transcript: {}", args.input.display());

    // Step 1: Load config and transcript
    info!("Step 1/5: Loading transcript...");
    let config = resolve_config(args.config_path.as_ref())?;
    let text = load_transcript(&args.input, config.input.max_bytes)
        .with_context(|| format!("Failed to load transcript {}", args.input.display()))?;

    // Step 2: Parse
    info!("Step 2/5: Parsing messages...");
    let parsed = parse_with_stats(&text);
    if parsed.messages.is_empty() {
        anyhow::bail!(
            "No messages found in {}. Make sure the file is a WhatsApp chat export.",
            args.input.display()
        );
    }
    debug!(
        "Parsed {} messages from {} lines",
        parsed.messages.len(),
        parsed.stats.total_lines()
    );

    // Step 3: Date filter
    info!("Step 3/5: Applying filters...");
    let (messages, date_filter) = apply_date_filter(parsed.messages, &args)?;

    if let Some(sender) = &args.sender {
        if !messages.iter().any(|m| &m.sender == sender) {
            warn!("Sender '{}' has no messages in this selection", sender);
        }
    }

    // Step 4: Build report
    let range = args.range.unwrap_or(config.analysis.range);
    let mut options = ReportOptions::new(source_name(&args), args.today.unwrap_or_else(|| Local::now().date_naive()));
    options.range = range;
    options.top_senders = args.top_senders.unwrap_or(config.analysis.top_senders);
    options.sender_filter = args.sender.clone();
    options.date_filter = date_filter;

    info!("Step 4/5: Building report ({} range)...", range);
    let report = build_report(&messages, parsed.stats, &options);

    for (i, entry) in report.top_senders.iter().take(3).enumerate() {
        debug!("  {}. {} ({} messages)", i + 1, entry.name, entry.count);
    }

    // Step 5: Write outputs
    info!("Step 5/5: Writing output...");
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("{}", render_terminal_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Narrow messages to `--from`/`--to`
///
/// **Private** - a missing bound defaults to the chat's own first or last day
fn apply_date_filter(messages: Vec<Message>, args: &AnalyzeArgs) -> Result<(Vec<Message>, Option<DateRange>)> {
    if args.from.is_none() && args.to.is_none() {
        return Ok((messages, None));
    }

    // Non-empty here, so bounds exist
    let Some((first, last)) = date_bounds(&messages) else {
        return Ok((messages, None));
    };

    // A missing bound never crosses the given one
    let start = args.from.unwrap_or_else(|| args.to.map_or(first, |to| first.min(to)));
    let end = args.to.unwrap_or_else(|| args.from.map_or(last, |from| last.max(from)));
    let range = DateRange::new(start, end)?;
    let filtered = filter_by_date_range(&messages, &range);

    info!(
        "Date filter {} to {}: {} of {} messages",
        range.start,
        range.end,
        filtered.len(),
        messages.len()
    );

    if filtered.is_empty() {
        anyhow::bail!(
            "No messages between {} and {} (chat covers {} to {})",
            range.start,
            range.end,
            first,
            last
        );
    }

    Ok((filtered, Some(range)))
}

fn source_name(args: &AnalyzeArgs) -> String {
    args.input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string())
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if let Some(top) = args.top_senders {
        if top == 0 {
            anyhow::bail!("top_senders must be greater than 0");
        }
        if top > 1000 {
            anyhow::bail!("top_senders is too large (max 1000)");
        }
    }

    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            anyhow::bail!("--from ({}) must not be after --to ({})", from, to);
        }
    }

    if let Some(sender) = &args.sender {
        if sender.trim().is_empty() {
            anyhow::bail!("Sender filter cannot be blank");
        }
    }

    Ok(())
}
