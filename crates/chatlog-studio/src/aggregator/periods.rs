//! Time-bucketed message counts.
//!
//! A `TimeRange` expands into an ordered list of daily or monthly buckets
//! ending at today; messages are then counted into the bucket matching
//! their day or month key.

use crate::parser::schema::{day_key, month_key, Message};
use crate::utils::error::AnalyticsError;
use chrono::{Datelike, Days, Months, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Coarse time range selector for activity series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum TimeRange {
    /// Last 30 days, one bucket per day
    #[serde(rename = "30D")]
    #[value(name = "30D")]
    Last30Days,

    /// Current month plus the three before it
    #[serde(rename = "3M")]
    #[value(name = "3M")]
    Last3Months,

    /// January of the current year onward
    #[serde(rename = "YTD")]
    #[value(name = "YTD")]
    YearToDate,

    /// Current month plus the eleven before it
    #[serde(rename = "12M")]
    #[value(name = "12M")]
    Last12Months,

    /// From the month of the earliest message
    #[serde(rename = "ALL")]
    #[value(name = "ALL")]
    AllTime,
}

impl TimeRange {
    /// Short code used in configs and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::Last30Days => "30D",
            TimeRange::Last3Months => "3M",
            TimeRange::YearToDate => "YTD",
            TimeRange::Last12Months => "12M",
            TimeRange::AllTime => "ALL",
        }
    }

    /// Whether this range uses one bucket per day
    pub fn is_daily(&self) -> bool {
        matches!(self, TimeRange::Last30Days)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeRange {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "30D" => Ok(TimeRange::Last30Days),
            "3M" => Ok(TimeRange::Last3Months),
            "YTD" => Ok(TimeRange::YearToDate),
            "12M" => Ok(TimeRange::Last12Months),
            "ALL" => Ok(TimeRange::AllTime),
            _ => Err(AnalyticsError::UnknownTimeRange(s.to_string())),
        }
    }
}

/// One time bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// "YYYY-MM-DD" for daily buckets, "YYYY-MM" for monthly ones
    pub key: String,

    /// Display label ("Jan 5" or "Jan 2025")
    pub label: String,

    pub is_daily: bool,
}

impl Period {
    fn day(date: NaiveDate) -> Self {
        Self {
            key: day_key(date),
            label: date.format("%b %-d").to_string(),
            is_daily: true,
        }
    }

    fn month(first_of_month: NaiveDate) -> Self {
        Self {
            key: month_key(first_of_month),
            label: month_label(first_of_month),
            is_daily: false,
        }
    }
}

/// Index-aligned labels and counts, ready for a chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

impl Series {
    /// Build a series from (label, count) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, usize)>) -> Self {
        let (labels, data) = pairs.into_iter().unzip();
        Self { labels, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.data.iter().sum()
    }

    /// Largest count, 0 for an empty series
    pub fn max(&self) -> usize {
        self.data.iter().copied().max().unwrap_or(0)
    }
}

/// Display label for a month ("Jan 2025")
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Display label for a "YYYY-MM" key, falling back to the key itself
pub fn month_key_label(key: &str) -> String {
    let parsed = key.split_once('-').and_then(|(y, m)| {
        let year = y.parse::<i32>().ok()?;
        let month = m.parse::<u32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)
    });

    match parsed {
        Some(date) => month_label(date),
        None => key.to_string(),
    }
}

/// First day of the month containing `date`
pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn months_back(first: NaiveDate, months: u32) -> NaiveDate {
    first.checked_sub_months(Months::new(months)).unwrap_or(first)
}

/// Generate the ordered buckets for a time range
///
/// **Public** - bucket enumeration for activity charts
///
/// # Arguments
/// * `range` - Range selector
/// * `messages` - Only consulted by `AllTime`, for the earliest date
/// * `today` - Last day covered by the buckets
///
/// # Returns
/// Buckets from the computed start through today's day or month, inclusive
pub fn time_range_periods(range: TimeRange, messages: &[Message], today: NaiveDate) -> Vec<Period> {
    if range.is_daily() {
        return (0..30u64)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(Period::day)
            .collect();
    }

    let this_month = first_of_month(today);
    let start = match range {
        TimeRange::Last3Months => months_back(this_month, 3),
        TimeRange::YearToDate => this_month - Days::new(u64::from(this_month.ordinal0())),
        TimeRange::Last12Months => months_back(this_month, 11),
        TimeRange::AllTime | TimeRange::Last30Days => {
            match messages.iter().map(Message::date).min() {
                Some(earliest) => first_of_month(earliest),
                None => months_back(this_month, 11),
            }
        }
    };

    let mut periods = Vec::new();
    let mut cur = start;
    while cur <= this_month {
        periods.push(Period::month(cur));
        match cur.checked_add_months(Months::new(1)) {
            Some(next) => cur = next,
            None => break,
        }
    }

    periods
}

/// Count messages per bucket of a time range
///
/// **Public** - main entry point for activity series
///
/// Messages outside the generated buckets are left out of the series.
pub fn messages_by_period(messages: &[Message], range: TimeRange, today: NaiveDate) -> Series {
    let periods = time_range_periods(range, messages, today);
    let is_daily = periods.first().is_some_and(|p| p.is_daily);

    let mut counts: HashMap<&str, usize> = periods.iter().map(|p| (p.key.as_str(), 0)).collect();

    let mut outside = 0usize;
    for msg in messages {
        let key = if is_daily {
            msg.day_key()
        } else {
            msg.period_key.clone()
        };
        match counts.get_mut(key.as_str()) {
            Some(count) => *count += 1,
            None => outside += 1,
        }
    }

    debug!(
        "Bucketed {} messages into {} {} periods ({} outside range)",
        messages.len() - outside,
        periods.len(),
        range,
        outside
    );

    Series::from_pairs(
        periods
            .iter()
            .map(|p| (p.label.clone(), counts.get(p.key.as_str()).copied().unwrap_or(0))),
    )
}
