//! Terminal output rendering for chat reports.
//!
//! Draws the report's series as plain-text bar charts and the heatmap as a
//! shaded grid, so a report can be read without any chart renderer.

use crate::aggregator::{ChatReport, Heatmap, Series, DAY_NAMES};
use colored::*;

const BAR_WIDTH: usize = 40;
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Render a human-readable summary of a report for the terminal
pub fn render_terminal_summary(report: &ChatReport) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_stats(report));
    out.push_str(&render_leaderboard(report));

    out.push_str(&format!(
        "\n{} ({})\n",
        "Activity".bold(),
        report
            .sender_filter
            .as_deref()
            .map(|s| format!("{}, {}", report.range, s))
            .unwrap_or_else(|| report.range.to_string())
    ));
    out.push_str(&render_bar_series(&report.activity, BAR_WIDTH));

    out.push_str(&format!("\n{}\n", "Weekly rhythm".bold()));
    out.push_str(&render_heatmap(&report.heatmap));

    if report.parse_stats.dropped_lines > 0 {
        out.push_str(&format!(
            "\n{} {} line(s) before the first message were skipped\n",
            "note:".yellow(),
            report.parse_stats.dropped_lines
        ));
    }

    out
}

fn render_header(report: &ChatReport) -> String {
    let mut out = String::new();
    out.push_str("\n💬 ");
    out.push_str(&"Chat Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Source: {}\n", report.source));
    if let Some(range) = &report.date_filter {
        out.push_str(&format!("Dates:  {} to {}\n", range.start, range.end));
    }
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_stats(report: &ChatReport) -> String {
    let s = &report.summary;
    format!(
        "Messages: {}\nSenders:  {}\nWords:    {}\nDays:     {}\nPer day:  {:.1}\n",
        s.total_messages.to_string().cyan(),
        s.total_senders,
        s.total_words,
        s.day_span,
        s.avg_per_day
    )
}

fn render_leaderboard(report: &ChatReport) -> String {
    if report.top_senders.is_empty() {
        return String::new();
    }

    let series = Series::from_pairs(
        report
            .top_senders
            .iter()
            .map(|entry| (entry.name.clone(), entry.count)),
    );

    format!(
        "\n{}\n{}",
        "Top senders".bold(),
        render_bar_series(&series, BAR_WIDTH)
    )
}

/// Render a series as horizontal bars, one row per label
///
/// **Public** - stands in for a chart renderer
pub fn render_bar_series(series: &Series, width: usize) -> String {
    if series.is_empty() {
        return "  (no data)\n".to_string();
    }

    let max = series.max();
    let label_width = series
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, &count) in series.labels.iter().zip(&series.data) {
        let bar_len = if max > 0 { count * width / max } else { 0 };
        // Keep non-zero counts visible
        let bar_len = if count > 0 { bar_len.max(1) } else { 0 };

        out.push_str(&format!(
            "  {:<label_width$} │{} {}\n",
            label,
            "█".repeat(bar_len).green(),
            count,
            label_width = label_width
        ));
    }
    out
}

/// Render the heatmap as a shaded 7x24 grid
pub fn render_heatmap(heatmap: &Heatmap) -> String {
    let mut out = String::from("      ");
    for hour in (0..24).step_by(3) {
        out.push_str(&format!("{:<3}", hour));
    }
    out.push('\n');

    for (day, row) in heatmap.grid.iter().enumerate() {
        out.push_str(&format!("  {} ", DAY_NAMES[day]));
        for &count in row {
            out.push(shade(count, heatmap.max));
        }
        out.push('\n');
    }

    if let Some((day, hour)) = heatmap.peak() {
        out.push_str(&format!(
            "  Busiest: {} {:02}:00 ({} messages)\n",
            DAY_NAMES[day], hour, heatmap.max
        ));
    }

    out
}

fn shade(count: usize, max: usize) -> char {
    if count == 0 || max == 0 {
        return SHADES[0];
    }
    let levels = SHADES.len() - 1;
    let level = (count * levels).div_ceil(max).clamp(1, levels);
    SHADES[level]
}
