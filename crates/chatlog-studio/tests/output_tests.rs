use chatlog_studio::aggregator::{build_report, prepare_digest, ChatDigest, DigestOptions, ReportOptions, TimeRange};
use chatlog_studio::output::{read_report, render_terminal_summary, validate_path, write_digest, write_report};
use chatlog_studio::parser::parse_with_stats;
use chrono::NaiveDate;
use std::path::Path;
use tempfile::NamedTempFile;

const TRANSCRIPT: &str = "\
[2/1/24, 8:00:00 AM] Ana: good morning
[2/1/24, 8:05:00 AM] Bo: morning!
[2/2/24, 7:45:00 PM] Ana: dinner?
";

fn create_test_report() -> chatlog_studio::aggregator::ChatReport {
    let parsed = parse_with_stats(TRANSCRIPT);
    let mut options = ReportOptions::new("chat.txt", NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    options.range = TimeRange::Last30Days;
    build_report(&parsed.messages, parsed.stats, &options)
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.range, TimeRange::Last30Days);
    assert_eq!(loaded.activity, report.activity);
    assert_eq!(loaded.top_senders, report.top_senders);
}

#[test]
fn test_report_json_shape() {
    let report = create_test_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["range"], "30D");
    assert_eq!(json["summary"]["total_messages"], 3);
    assert_eq!(json["heatmap"]["grid"].as_array().unwrap().len(), 7);
    assert_eq!(json["heatmap"]["grid"][4][8], 2);
    assert!(json.get("sender_filter").is_none());
}

#[test]
fn test_write_digest() {
    let parsed = parse_with_stats(TRANSCRIPT);
    let digest = prepare_digest(&parsed.messages, &DigestOptions::default()).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/digest.json");
    write_digest(&digest, &path).unwrap();

    let loaded: ChatDigest = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, digest);
    assert_eq!(loaded.message_count, 3);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_terminal_summary_mentions_senders() {
    let out = render_terminal_summary(&create_test_report());

    assert!(out.contains("chat.txt"));
    assert!(out.contains("Ana"));
    assert!(out.contains("Bo"));
    assert!(out.contains("Busiest: Thu 08:00"));
}
