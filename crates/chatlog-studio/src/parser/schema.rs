//! Message record and parse diagnostics.
//!
//! A `Message` is built once by the transcript parser and treated as
//! read-only everywhere downstream.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One chat message recovered from a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Naive local date and time (minute precision) of the exporting device
    pub timestamp: NaiveDateTime,

    /// Hour of day, 0-23
    pub hour: u32,

    /// Display name exactly as exported, trimmed
    pub sender: String,

    /// Message text, continuation lines joined with '\n'
    pub body: String,

    /// Month bucket key ("YYYY-MM")
    pub period_key: String,
}

impl Message {
    /// Build a message, deriving `hour` and `period_key` from the timestamp
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            hour: timestamp.hour(),
            period_key: month_key(timestamp.date()),
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Calendar date of the message
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Day bucket key ("YYYY-MM-DD")
    pub fn day_key(&self) -> String {
        day_key(self.date())
    }

    /// Day of week, 0 = Sunday ... 6 = Saturday
    pub fn weekday_index(&self) -> usize {
        self.date().weekday().num_days_from_sunday() as usize
    }

    /// Number of whitespace-delimited words in the body
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Month key for a date ("YYYY-MM")
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Day key for a date ("YYYY-MM-DD")
pub fn day_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Line-level counters from one parse pass
///
/// Informational only: the parser never fails on bad lines, these counts
/// just make the lenient policy observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines that opened a new message
    pub header_lines: usize,

    /// Lines appended to the open message
    pub continuation_lines: usize,

    /// Non-blank lines seen before any message was open
    pub dropped_lines: usize,

    /// Empty or whitespace-only lines
    pub blank_lines: usize,
}

impl ParseStats {
    /// Total number of lines inspected
    pub fn total_lines(&self) -> usize {
        self.header_lines + self.continuation_lines + self.dropped_lines + self.blank_lines
    }
}

/// Parser output with diagnostics
#[derive(Debug, Clone, Default)]
pub struct ParsedTranscript {
    pub messages: Vec<Message>,
    pub stats: ParseStats,
}
