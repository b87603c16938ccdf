//! Caller-side slicing of a message sequence.
//!
//! Dashboards narrow the parsed messages to a date window or a single
//! sender before running analytics. Both ends of a date window are
//! included in full.

use crate::parser::schema::Message;
use crate::utils::error::AnalyticsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a window, rejecting `start` after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AnalyticsError> {
        if start > end {
            return Err(AnalyticsError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the window (both ends included)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Earliest and latest message dates
///
/// **Public** - scans the whole slice; input order is not trusted
pub fn date_bounds(messages: &[Message]) -> Option<(NaiveDate, NaiveDate)> {
    messages.iter().map(Message::date).fold(None, |bounds, date| {
        Some(match bounds {
            None => (date, date),
            Some((lo, hi)) => (lo.min(date), hi.max(date)),
        })
    })
}

/// Messages dated inside `range`, in their original order
pub fn filter_by_date_range(messages: &[Message], range: &DateRange) -> Vec<Message> {
    messages
        .iter()
        .filter(|m| range.contains(m.date()))
        .cloned()
        .collect()
}

/// Messages from one sender (exact name match), in their original order
pub fn filter_by_sender(messages: &[Message], sender: &str) -> Vec<Message> {
    messages
        .iter()
        .filter(|m| m.sender == sender)
        .cloned()
        .collect()
}
