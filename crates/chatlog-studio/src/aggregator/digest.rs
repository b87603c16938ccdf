//! Compact recent-history text for an AI insights service.
//!
//! Keeps the last `days` of the chat, writes one short line per message
//! and trims from the front so the text fits a character budget. The
//! service call itself happens elsewhere; this only prepares its input.

use super::filter::date_bounds;
use crate::parser::schema::Message;
use crate::utils::config::{DEFAULT_DIGEST_DAYS, DEFAULT_DIGEST_MAX_CHARS};
use chrono::{Datelike, Days};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Digest window and size limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestOptions {
    /// Days of history before the latest message
    pub days: i64,

    /// Maximum characters of digest text
    pub max_chars: usize,
}

impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DIGEST_DAYS,
            max_chars: DEFAULT_DIGEST_MAX_CHARS,
        }
    }
}

/// Prepared digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatDigest {
    /// One `M/D HH:00 | Sender: body` line per message
    pub text: String,

    /// Messages inside the window (before any trimming)
    pub message_count: usize,

    /// Human-readable window, e.g. "Jan 5 – Feb 4, 2025"
    pub date_range: String,

    /// Distinct senders in the window, alphabetical
    pub senders: Vec<String>,
}

/// Prepare the AI digest for a parsed chat
///
/// **Public** - main entry point for digest preparation
///
/// # Returns
/// `None` when there are no messages to summarize
pub fn prepare_digest(messages: &[Message], options: &DigestOptions) -> Option<ChatDigest> {
    let (first, latest) = date_bounds(messages)?;
    let back = u64::try_from(options.days).unwrap_or(0);
    // A window older than the calendar can hold covers the whole chat
    let cutoff = latest.checked_sub_days(Days::new(back)).unwrap_or(first);

    let recent: Vec<&Message> = messages.iter().filter(|m| m.date() >= cutoff).collect();
    let earliest = recent.first()?.date();

    let senders: Vec<String> = recent
        .iter()
        .map(|m| m.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let text = recent
        .iter()
        .map(|m| format_line(m))
        .collect::<Vec<_>>()
        .join("\n");
    let text = keep_tail(&text, options.max_chars).to_string();

    debug!(
        "Digest: {} messages since {}, {} chars",
        recent.len(),
        cutoff,
        text.chars().count()
    );

    Some(ChatDigest {
        text,
        message_count: recent.len(),
        date_range: format!(
            "{} \u{2013} {}",
            earliest.format("%b %-d"),
            latest.format("%b %-d, %Y")
        ),
        senders,
    })
}

/// One digest line; minutes are dropped to keep the text short
fn format_line(msg: &Message) -> String {
    let date = msg.date();
    format!(
        "{}/{} {:02}:00 | {}: {}",
        date.month(),
        date.day(),
        msg.hour,
        msg.sender,
        msg.body
    )
}

/// Last `max_chars` characters of `text`, starting at a line boundary
///
/// **Private** - the partial first line left by the cut is dropped
fn keep_tail(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }

    let Some((cut, _)) = text.char_indices().rev().nth(max_chars - 1) else {
        return text;
    };
    if cut == 0 {
        return text;
    }

    let tail = &text[cut..];
    match tail.find('\n') {
        Some(nl) => &tail[nl + 1..],
        None => tail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, m: u32, d: u32, hour: u32, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(hour, 17, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_digest_window_and_lines() {
        let messages = vec![
            msg("Old", 1, 1, 9, "too early"),
            msg("Bo", 2, 4, 8, "morning"),
            msg("Ana", 3, 6, 21, "night"),
        ];
        let digest = prepare_digest(&messages, &DigestOptions::default()).unwrap();

        assert_eq!(digest.message_count, 2);
        assert_eq!(digest.text, "2/4 08:00 | Bo: morning\n3/6 21:00 | Ana: night");
        assert_eq!(digest.senders, vec!["Ana", "Bo"]);
        assert_eq!(digest.date_range, "Feb 4 \u{2013} Mar 6, 2025");
    }

    #[test]
    fn test_digest_cutoff_day_included() {
        let messages = vec![msg("A", 1, 1, 9, "edge"), msg("A", 1, 31, 9, "last")];
        let digest = prepare_digest(&messages, &DigestOptions::default()).unwrap();
        assert_eq!(digest.message_count, 2);
    }

    #[test]
    fn test_digest_huge_window_keeps_everything() {
        let messages = vec![msg("A", 1, 1, 9, "first"), msg("B", 6, 1, 9, "last")];
        let options = DigestOptions {
            days: 1_000_000_000,
            max_chars: 100,
        };

        let digest = prepare_digest(&messages, &options).unwrap();
        assert_eq!(digest.message_count, 2);
        assert_eq!(digest.date_range, "Jan 1 \u{2013} Jun 1, 2025");
    }

    #[test]
    fn test_digest_empty() {
        assert!(prepare_digest(&[], &DigestOptions::default()).is_none());
    }

    #[test]
    fn test_keep_tail_drops_partial_line() {
        let text = "first line\nsecond\nthird";
        assert_eq!(keep_tail(text, 100), text);
        assert_eq!(keep_tail(text, 12), "third");
        assert_eq!(keep_tail(text, 13), "second\nthird");
    }

    #[test]
    fn test_keep_tail_multibyte() {
        let text = "ééé\nüü";
        assert_eq!(keep_tail(text, 4), "üü");
    }
}
