//! Digest command implementation.
//!
//! Prepares the compact recent-history text that the insights service
//! consumes, and either writes it as JSON or prints it.

use super::models::DigestArgs;
use super::utils::{load_transcript, resolve_config};
use crate::aggregator::{prepare_digest, ChatDigest, DigestOptions};
use crate::output::write_digest;
use crate::parser::parse;
use anyhow::{Context, Result};
use log::info;

/// Execute the digest command
///
/// **Public** - main entry point called from main.rs
pub fn execute_digest(args: DigestArgs) -> Result<ChatDigest> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    let config = resolve_config(args.config_path.as_ref())?;
    let options = DigestOptions {
        days: args.days.unwrap_or(config.digest.days),
        max_chars: args.max_chars.unwrap_or(config.digest.max_chars),
    };

    if options.days < 0 {
        anyhow::bail!("days cannot be negative");
    }
    if options.max_chars == 0 {
        anyhow::bail!("max_chars must be greater than 0");
    }

    let text = load_transcript(&args.input, config.input.max_bytes)
        .with_context(|| format!("Failed to load transcript {}", args.input.display()))?;

    let messages = parse(&text);
    let digest = prepare_digest(&messages, &options).with_context(|| {
        format!(
            "No messages found in {}. Make sure the file is a WhatsApp chat export.",
            args.input.display()
        )
    })?;

    info!(
        "Digest covers {} ({} messages, {} participants)",
        digest.date_range,
        digest.message_count,
        digest.senders.len()
    );

    match &args.output_json {
        Some(path) => {
            write_digest(&digest, path).context("Failed to write digest JSON")?;
            info!("✓ Digest written to: {}", path.display());
        }
        None => println!("{}", digest.text),
    }

    Ok(digest)
}
