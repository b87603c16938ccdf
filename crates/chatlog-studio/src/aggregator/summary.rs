//! Headline statistics for a message slice.

use super::filter::date_bounds;
use crate::parser::schema::Message;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Scalar summary of a chat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of messages
    pub total_messages: usize,

    /// Number of distinct senders
    pub total_senders: usize,

    /// Whitespace-delimited words across all bodies
    pub total_words: usize,

    /// Calendar days from first to last message, inclusive
    pub day_span: i64,

    /// Messages per day, rounded to one decimal place
    pub avg_per_day: f64,
}

/// Calculate summary statistics
///
/// **Public** - main entry point for dashboard cards
///
/// An empty slice yields all zeros.
pub fn summary_stats(messages: &[Message]) -> SummaryStats {
    let Some((first, last)) = date_bounds(messages) else {
        return SummaryStats::default();
    };

    let total_messages = messages.len();
    let total_senders = messages
        .iter()
        .map(|m| m.sender.as_str())
        .collect::<HashSet<_>>()
        .len();
    let total_words = messages.iter().map(Message::word_count).sum();

    let day_span = ((last - first).num_days() + 1).max(1);
    let avg_per_day = round_one_decimal(total_messages as f64 / day_span as f64);

    debug!(
        "Summary: {} messages, {} senders, {} days",
        total_messages, total_senders, day_span
    );

    SummaryStats {
        total_messages,
        total_senders,
        total_words,
        day_span,
        avg_per_day,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, day: u32, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_summary_single_day() {
        let messages: Vec<_> = (0..10).map(|_| msg("A", 1, "hello there")).collect();
        let stats = summary_stats(&messages);

        assert_eq!(stats.total_messages, 10);
        assert_eq!(stats.total_senders, 1);
        assert_eq!(stats.total_words, 20);
        assert_eq!(stats.day_span, 1);
        assert_eq!(stats.avg_per_day, 10.0);
    }

    #[test]
    fn test_summary_five_day_span() {
        let mut messages: Vec<_> = (0..9).map(|_| msg("A", 1, "x")).collect();
        messages.push(msg("B", 5, "y"));
        let stats = summary_stats(&messages);

        assert_eq!(stats.day_span, 5);
        assert_eq!(stats.avg_per_day, 2.0);
        assert_eq!(stats.total_senders, 2);
    }

    #[test]
    fn test_summary_rounds_average() {
        let messages = vec![msg("A", 1, ""), msg("A", 2, ""), msg("A", 3, ""), msg("A", 3, "")];
        // 4 messages over 3 days = 1.333...
        assert_eq!(summary_stats(&messages).avg_per_day, 1.3);
    }

    #[test]
    fn test_summary_unsorted_input() {
        let messages = vec![msg("A", 10, "late"), msg("A", 1, "early")];
        assert_eq!(summary_stats(&messages).day_span, 10);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summary_stats(&[]), SummaryStats::default());
    }
}
