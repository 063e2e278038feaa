//! Tabular rendering of per-tag duration summaries.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::NaiveDate;

/// Placeholder cell rendered when a day has no tags at all.
const EMPTY_CELL: &str = "-";

/// Renders the per-tag totals for one day as an aligned two-column table.
///
/// Tags sort lexicographically. Seconds convert to hours by straight
/// division, rounded to two decimals. A day without tags still renders a
/// well-formed table with a single placeholder row.
pub fn format_stats(date: NaiveDate, stats: &BTreeMap<String, f64>) -> String {
    // BTreeMap already iterates in sorted tag order.
    let rows: Vec<(&str, String)> = if stats.is_empty() {
        vec![(EMPTY_CELL, EMPTY_CELL.to_string())]
    } else {
        stats
            .iter()
            .map(|(tag, seconds)| (tag.as_str(), format_hours(*seconds)))
            .collect()
    };

    let tag_width = rows
        .iter()
        .map(|(tag, _)| tag.len())
        .max()
        .unwrap_or(0)
        .max("Tag".len());
    let time_width = rows
        .iter()
        .map(|(_, time)| time.len())
        .max()
        .unwrap_or(0)
        .max("Time (H)".len());

    let title = date.format("%Y-%m-%d").to_string();

    let mut out = String::new();
    writeln!(out, "{title}").unwrap();
    writeln!(out, "{}", "=".repeat(title.len())).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{:<tag_width$} | {}", "Tag", "Time (H)").unwrap();
    writeln!(out, "{:-<tag_width$} | {:-<time_width$}", "", "").unwrap();
    for (tag, time) in &rows {
        writeln!(out, "{tag:<tag_width$} | {time}").unwrap();
    }

    out
}

/// Converts seconds to hours rounded to two decimals, trimming trailing
/// zeros so `1.50` renders as `1.5` and `8.00` as `8`.
fn format_hours(seconds: f64) -> String {
    let hours = (seconds / 3600.0 * 100.0).round() / 100.0;
    let mut text = format!("{hours:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
