//! Analytics over parsed messages.
//!
//! Every function here is a pure query over a message slice:
//! - Time-bucketed activity series
//! - Sender leaderboards and per-month / per-user breakdowns
//! - Summary statistics and the weekly activity heatmap
//! - Date and sender filtering for callers
//! - AI digest preparation and report assembly

pub mod digest;
pub mod filter;
pub mod heatmap;
pub mod periods;
pub mod rankings;
pub mod report;
pub mod summary;

// Re-export main types and functions
pub use digest::{prepare_digest, ChatDigest, DigestOptions};
pub use filter::{date_bounds, filter_by_date_range, filter_by_sender, DateRange};
pub use heatmap::{activity_heatmap, Heatmap, DAY_NAMES};
pub use periods::{messages_by_period, time_range_periods, Period, Series, TimeRange};
pub use rankings::{all_months, all_senders, monthly_stats_by_user, top_senders, user_timeline, SenderCount};
pub use report::{build_report, ChatReport, MonthBreakdown, ReportOptions};
pub use summary::{summary_stats, SummaryStats};
