//! Sender leaderboards, per-month breakdowns and per-user timelines.
//!
//! Ties are broken by first-seen order: the sender (or month) that appears
//! earliest in the message slice ranks first among equal counts. The sort
//! is stable, so this holds for every ranked list in this module.

use super::periods::{month_key_label, Series};
use crate::parser::schema::Message;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A sender and their message count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub name: String,
    pub count: usize,
}

/// Count occurrences of each key, keeping first-seen order
///
/// **Public (crate)** - shared tally for every ranking
pub(crate) fn tally<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for key in keys {
        match index.get(key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }

    counts
}

fn rank_descending(mut counts: Vec<(String, usize)>) -> Vec<(String, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most active senders
///
/// **Public** - leaderboard for dashboards and reports
///
/// # Arguments
/// * `messages` - Parsed messages
/// * `limit` - Maximum number of entries (dashboards use 5)
///
/// # Returns
/// Senders sorted by count (descending), first-seen order among ties
pub fn top_senders(messages: &[Message], limit: usize) -> Vec<SenderCount> {
    rank_descending(tally(messages.iter().map(|m| m.sender.as_str())))
        .into_iter()
        .take(limit)
        .map(|(name, count)| SenderCount { name, count })
        .collect()
}

/// Per-sender counts within one month
///
/// **Public** - labels are sender names, sorted by count (descending)
pub fn monthly_stats_by_user(messages: &[Message], month_key: &str) -> Series {
    let in_month = messages
        .iter()
        .filter(|m| m.period_key == month_key)
        .map(|m| m.sender.as_str());

    Series::from_pairs(rank_descending(tally(in_month)))
}

/// Monthly message counts for one sender
///
/// **Public** - labels are "Jan 2025" style, oldest month first
pub fn user_timeline(messages: &[Message], sender: &str) -> Series {
    let mut counts = tally(
        messages
            .iter()
            .filter(|m| m.sender == sender)
            .map(|m| m.period_key.as_str()),
    );

    // Zero-padded "YYYY-MM" keys sort chronologically as strings
    counts.sort_by(|a, b| a.0.cmp(&b.0));

    Series::from_pairs(
        counts
            .into_iter()
            .map(|(key, count)| (month_key_label(&key), count)),
    )
}

/// Distinct sender names, alphabetical
pub fn all_senders(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct month keys, most recent first
pub fn all_months(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .map(|m| m.period_key.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .map(str::to_string)
        .collect()
}
