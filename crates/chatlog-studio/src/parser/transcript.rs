//! Main transcript parser for WhatsApp chat exports.
//!
//! Walks the export once, line by line. A header line opens a new message;
//! any other non-blank line is folded into the open message. Lines that
//! cannot be placed are dropped without error, so system notices and odd
//! exporter output never abort a parse.

use super::schema::{Message, ParseStats, ParsedTranscript};
use super::timestamp::resolve_timestamp;
use chrono::NaiveDateTime;
use log::debug;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Header line layout, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderFormat {
    /// iOS: `[7/7/25, 1:59:53 PM] Aryan Shah: hello`
    Bracketed,
    /// Android: `07/07/2025, 13:59 - Aryan Shah: hello`
    Dashed,
}

fn re_bracketed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?\s*(?:AM|PM)?)\]\s*([^:]+):\s*(.*)$",
        )
        .expect("bracketed header pattern is valid")
    })
}

fn re_dashed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?\s*(?:AM|PM)?)\s*-\s*([^:]+):\s*(.*)$",
        )
        .expect("dashed header pattern is valid")
    })
}

/// A message whose body may still grow
///
/// **Private** - only the parser mutates messages before they are emitted
struct PendingMessage {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
}

impl PendingMessage {
    fn append_line(&mut self, text: &str) {
        self.body.push('\n');
        self.body.push_str(text);
    }

    fn finish(self) -> Message {
        Message::new(self.timestamp, self.sender, self.body)
    }
}

/// Parse a transcript into messages
///
/// **Public** - main entry point for parsing
///
/// Never fails. An empty result means no header line was recognized, which
/// callers should treat as "not a chat export".
///
/// # Example
/// ```
/// use chatlog_studio::parser::parse;
///
/// let messages = parse("[1/2/24, 9:15:00 AM] Ana: morning\nall good?");
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].body, "morning\nall good?");
/// ```
pub fn parse(raw_text: &str) -> Vec<Message> {
    parse_with_stats(raw_text).messages
}

/// Parse a transcript and report how each line was handled
///
/// **Public** - same behavior as `parse`, plus line diagnostics
pub fn parse_with_stats(raw_text: &str) -> ParsedTranscript {
    let mut messages = Vec::new();
    let mut stats = ParseStats::default();
    let mut current: Option<PendingMessage> = None;

    for raw_line in raw_text.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let line = strip_direction_marks(line);

        if let Some(header) = match_header(line) {
            if let Some(done) = current.take() {
                messages.push(done.finish());
            }
            current = Some(header);
            stats.header_lines += 1;
            continue;
        }

        let text = line.trim();
        if text.is_empty() {
            stats.blank_lines += 1;
        } else if let Some(open) = current.as_mut() {
            open.append_line(text);
            stats.continuation_lines += 1;
        } else {
            stats.dropped_lines += 1;
        }
    }

    if let Some(done) = current {
        messages.push(done.finish());
    }

    debug!(
        "Parsed {} messages ({} continuation, {} dropped, {} blank lines)",
        messages.len(),
        stats.continuation_lines,
        stats.dropped_lines,
        stats.blank_lines
    );

    ParsedTranscript { messages, stats }
}

/// Remove a leading byte-order mark or left-to-right marks
///
/// **Private** - exporters put these on the first line and on attachment lines
fn strip_direction_marks(line: &str) -> &str {
    line.trim_start_matches(|c| c == '\u{feff}' || c == '\u{200e}')
}

/// Try each header format in priority order
///
/// **Private** - internal helper for parse_with_stats
fn match_header(line: &str) -> Option<PendingMessage> {
    [HeaderFormat::Bracketed, HeaderFormat::Dashed]
        .into_iter()
        .find_map(|format| {
            let re = match format {
                HeaderFormat::Bracketed => re_bracketed(),
                HeaderFormat::Dashed => re_dashed(),
            };
            re.captures(line).and_then(|caps| build_pending(&caps))
        })
}

/// Turn header captures into an open message
///
/// **Private** - a header with a blank sender is not a header
fn build_pending(caps: &Captures<'_>) -> Option<PendingMessage> {
    let sender = caps[3].trim();
    if sender.is_empty() {
        return None;
    }

    let timestamp = resolve_timestamp(&caps[1], &caps[2])?;

    Some(PendingMessage {
        timestamp,
        sender: sender.to_string(),
        body: caps[4].trim().to_string(),
    })
}
