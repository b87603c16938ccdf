//! Report assembly.
//!
//! Runs every analytics view over one message slice and bundles the
//! results into a versioned, serializable document.

use super::filter::{filter_by_sender, DateRange};
use super::heatmap::{activity_heatmap, Heatmap};
use super::periods::{messages_by_period, Series, TimeRange};
use super::rankings::{all_months, all_senders, monthly_stats_by_user, top_senders, user_timeline, SenderCount};
use super::summary::{summary_stats, SummaryStats};
use crate::parser::schema::{Message, ParseStats};
use crate::utils::config::{DEFAULT_TOP_SENDERS, SCHEMA_VERSION};
use chrono::{NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Transcript the report was built from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub summary: SummaryStats,

    /// Leaderboard across all senders
    pub top_senders: Vec<SenderCount>,

    /// Distinct senders, alphabetical
    pub senders: Vec<String>,

    /// Distinct month keys, most recent first
    pub months: Vec<String>,

    /// Range used for `activity`
    pub range: TimeRange,

    /// Message counts per period of `range`
    pub activity: Series,

    pub heatmap: Heatmap,

    /// Per-sender counts for the most recent month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_month: Option<MonthBreakdown>,

    /// Monthly counts for `sender_filter`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_timeline: Option<Series>,

    /// Line diagnostics from the parser
    pub parse_stats: ParseStats,

    /// Sender that `activity` was narrowed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_filter: Option<String>,

    /// Date window applied before analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateRange>,
}

/// Per-sender counts for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBreakdown {
    pub month: String,
    pub senders: Series,
}

/// Report-building options
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub source: String,
    pub range: TimeRange,
    pub top_senders: usize,
    /// Last day covered by the activity series
    pub today: NaiveDate,
    pub sender_filter: Option<String>,
    /// Recorded in the report; the caller has already applied it
    pub date_filter: Option<DateRange>,
}

impl ReportOptions {
    pub fn new(source: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            source: source.into(),
            range: TimeRange::AllTime,
            top_senders: DEFAULT_TOP_SENDERS,
            today,
            sender_filter: None,
            date_filter: None,
        }
    }
}

/// Build a report from parsed (and optionally date-filtered) messages
///
/// **Public** - used by commands to create final output
///
/// The sender filter narrows only the activity series; the leaderboard,
/// summary and heatmap always cover every sender.
pub fn build_report(messages: &[Message], parse_stats: ParseStats, options: &ReportOptions) -> ChatReport {
    let summary = summary_stats(messages);
    let months = all_months(messages);

    let (activity, sender_timeline) = match options.sender_filter.as_deref() {
        Some(sender) => {
            let own = filter_by_sender(messages, sender);
            debug!("Narrowing activity to {} ({} messages)", sender, own.len());
            (
                messages_by_period(&own, options.range, options.today),
                Some(user_timeline(messages, sender)),
            )
        }
        None => (messages_by_period(messages, options.range, options.today), None),
    };

    let latest_month = months.first().map(|month| MonthBreakdown {
        month: month.clone(),
        senders: monthly_stats_by_user(messages, month),
    });

    ChatReport {
        version: SCHEMA_VERSION.to_string(),
        source: options.source.clone(),
        generated_at: Utc::now().to_rfc3339(),
        summary,
        top_senders: top_senders(messages, options.top_senders),
        senders: all_senders(messages),
        months,
        range: options.range,
        activity,
        heatmap: activity_heatmap(messages),
        latest_month,
        sender_timeline,
        parse_stats,
        sender_filter: options.sender_filter.clone(),
        date_filter: options.date_filter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: &str, m: u32, d: u32) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        Message::new(ts, sender, "hey you")
    }

    #[test]
    fn test_build_report_views_agree() {
        let messages = vec![msg("A", 1, 1), msg("B", 1, 2), msg("A", 2, 1)];
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let report = build_report(&messages, ParseStats::default(), &ReportOptions::new("chat.txt", today));

        assert_eq!(report.version, SCHEMA_VERSION);
        assert_eq!(report.summary.total_messages, 3);
        assert_eq!(report.activity.labels, vec!["Jan 2024", "Feb 2024"]);
        assert_eq!(report.activity.data, vec![2, 1]);
        assert_eq!(report.heatmap.total(), 3);
        assert_eq!(report.top_senders[0].name, "A");
        assert_eq!(report.months, vec!["2024-02", "2024-01"]);

        let latest = report.latest_month.unwrap();
        assert_eq!(latest.month, "2024-02");
        assert_eq!(latest.senders.labels, vec!["A"]);
        assert!(report.sender_timeline.is_none());
    }

    #[test]
    fn test_sender_filter_narrows_activity_only() {
        let messages = vec![msg("A", 1, 1), msg("B", 1, 2), msg("A", 2, 1)];
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let mut options = ReportOptions::new("chat.txt", today);
        options.sender_filter = Some("B".to_string());

        let report = build_report(&messages, ParseStats::default(), &options);

        assert_eq!(report.activity.total(), 1);
        assert_eq!(report.summary.total_messages, 3);
        assert_eq!(report.sender_timeline.unwrap().labels, vec!["Jan 2024"]);
    }

    #[test]
    fn test_build_report_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let report = build_report(&[], ParseStats::default(), &ReportOptions::new("empty.txt", today));

        assert_eq!(report.summary, SummaryStats::default());
        assert!(report.top_senders.is_empty());
        assert!(report.latest_month.is_none());
        assert_eq!(report.activity.total(), 0);
    }
}
