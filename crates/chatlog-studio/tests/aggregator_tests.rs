use chatlog_studio::aggregator::{
    activity_heatmap, all_months, all_senders, messages_by_period, monthly_stats_by_user,
    prepare_digest, summary_stats, time_range_periods, top_senders, user_timeline, DigestOptions,
    Heatmap, SummaryStats, TimeRange,
};
use chatlog_studio::parser::{parse, Message};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn repeat(sender: &str, count: usize) -> Vec<Message> {
    (0..count)
        .map(|_| Message::new(at(2024, 6, 1, 12), sender, "hi"))
        .collect()
}

#[test]
fn test_top_senders_tie_uses_first_seen() {
    let mut messages = repeat("A", 5);
    messages.extend(repeat("B", 5));
    messages.extend(repeat("C", 2));

    let top = top_senders(&messages, 2);
    let names: Vec<_> = top.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(top.len(), 2);
    assert_eq!(names, vec!["A", "B"]);
    assert!(top.iter().all(|e| e.count == 5));
}

#[test]
fn test_heatmap_sum_matches_count() {
    let text = "\
[3/3/24, 9:00:00 AM] A: sun
[3/4/24, 11:30:00 PM] B: mon
[3/9/24, 12:15:00 PM] A: sat
[3/9/24, 12:45:00 PM] A: sat again
";
    let messages = parse(text);
    let heatmap = activity_heatmap(&messages);

    assert_eq!(heatmap.total(), messages.len());
    assert_eq!(heatmap.grid[0][9], 1);
    assert_eq!(heatmap.grid[1][23], 1);
    assert_eq!(heatmap.grid[6][12], 2);
    assert_eq!(heatmap.max, 2);
}

#[test]
fn test_average_per_day() {
    let one_day: Vec<_> = (0..10).map(|h| Message::new(at(2024, 1, 1, h), "A", "x")).collect();
    assert_eq!(summary_stats(&one_day).avg_per_day, 10.0);

    let five_days: Vec<_> = (0..10)
        .map(|i| Message::new(at(2024, 1, 1 + (i % 5) as u32, 8), "A", "x"))
        .collect();
    assert_eq!(summary_stats(&five_days).avg_per_day, 2.0);
}

#[test]
fn test_empty_input_everywhere() {
    let empty: Vec<Message> = parse("");
    let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    assert_eq!(summary_stats(&empty), SummaryStats::default());
    assert!(top_senders(&empty, 5).is_empty());
    assert!(monthly_stats_by_user(&empty, "2025-01").is_empty());
    assert!(user_timeline(&empty, "A").is_empty());
    assert!(all_senders(&empty).is_empty());
    assert!(all_months(&empty).is_empty());
    assert_eq!(activity_heatmap(&empty), Heatmap::default());
    assert!(prepare_digest(&empty, &DigestOptions::default()).is_none());

    let series = messages_by_period(&empty, TimeRange::AllTime, today);
    assert_eq!(series.len(), 12);
    assert_eq!(series.total(), 0);
    assert_eq!(time_range_periods(TimeRange::Last30Days, &empty, today).len(), 30);
}

#[test]
fn test_pipeline_over_transcript() {
    let text = "\
12/30/23, 22:10 - Ana: last year
1/2/24, 08:00 - Bo: new year
1/2/24, 08:05 - Ana: hi Bo
2/14/24, 19:00 - Ana: <3
";
    let messages = parse(text);
    let today = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();

    let series = messages_by_period(&messages, TimeRange::AllTime, today);
    assert_eq!(series.labels, vec!["Dec 2023", "Jan 2024", "Feb 2024"]);
    assert_eq!(series.data, vec![1, 2, 1]);

    let ytd = messages_by_period(&messages, TimeRange::YearToDate, today);
    assert_eq!(ytd.data, vec![2, 1]);

    assert_eq!(all_months(&messages), vec!["2024-02", "2024-01", "2023-12"]);
    assert_eq!(user_timeline(&messages, "Ana").data, vec![1, 1, 1]);

    let jan = monthly_stats_by_user(&messages, "2024-01");
    assert_eq!(jan.labels, vec!["Bo", "Ana"]);

    let stats = summary_stats(&messages);
    assert_eq!(stats.total_words, 7);
    assert_eq!(stats.day_span, 47);
}
