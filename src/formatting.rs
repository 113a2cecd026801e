//! Formatting helper functions for the taskboard MCP server
//!
//! This module renders task lists and statistics as plain text for tool
//! responses. Indices are printed next to each pending task because the
//! completion tools address tasks by position.

use crate::tasks::{DayAgenda, DayStats, HistoryPoint};
use chrono::NaiveDate;

/// Format a numbered task list under a heading
///
/// # Arguments
/// * `heading` - Section title (e.g., "Regular tasks")
/// * `tasks` - Titles in their stored order
pub fn format_task_section(heading: &str, tasks: &[String]) -> String {
    let mut result = format!("{} ({}):\n", heading, tasks.len());
    if tasks.is_empty() {
        result.push_str("  (none)\n");
        return result;
    }
    for (index, title) in tasks.iter().enumerate() {
        result.push_str(&format!("  [{}] {}\n", index, title));
    }
    result
}

/// Format the pending regular tasks and the daily tasks of one date
pub fn format_pending(date: NaiveDate, regular: &[String], daily: &[String]) -> String {
    let mut result = format!("Tasks for {} ({}):\n\n", date, date.format("%a"));
    result.push_str(&format_task_section("Regular tasks", regular));
    result.push('\n');
    result.push_str(&format_task_section("Day tasks", daily));
    result
}

/// Format the daily progress view (completed / total / remaining)
pub fn format_day_stats(stats: &DayStats) -> String {
    format!(
        "Progress for {} ({}):\n  Completed: {}\n  Total tasks: {}\n  Remaining: {}\n",
        stats.date,
        stats.label(),
        stats.completed,
        stats.total,
        stats.remaining()
    )
}

/// Format the weekly score with the per-day breakdown it was computed from
pub fn format_weekly_score(score: u8, week: &[DayStats]) -> String {
    let mut result = format!("Score: {}/100\n", score);
    if let (Some(first), Some(last)) = (week.first(), week.last()) {
        result.push_str(&format!("Week {} to {}:\n", first.date, last.date));
    }
    for day in week {
        result.push_str(&format!(
            "  {} {}: {} completed / {} total\n",
            day.label(),
            day.date.format("%d %b"),
            day.completed,
            day.total
        ));
    }
    result
}

/// Format the weekly calendar view
pub fn format_agenda(agenda: &[DayAgenda<'_>]) -> String {
    let mut result = String::from("Weekly calendar:\n");
    for day in agenda {
        result.push_str(&format!("\n{} {}\n", day.date.format("%a"), day.date.format("%d %b")));
        if day.tasks.is_empty() {
            result.push_str("  (no tasks)\n");
        }
        for task in &day.tasks {
            result.push_str(&format!("  - {}\n", task));
        }
    }
    result
}

/// Format the completion trend, one line per date
pub fn format_history(history: &[HistoryPoint]) -> String {
    if history.is_empty() {
        return "No history yet.".to_string();
    }

    let mut result = format!("Consistency trend ({} day(s)):\n", history.len());
    for point in history {
        result.push_str(&format!("  {}: {} completed\n", point.date, point.completed));
    }
    result
}

/// Format the confirmation for a batch completion
pub fn format_completed(titles: &[String], completed_on: NaiveDate) -> String {
    let mut result = format!("Completed {} task(s) on {}:\n", titles.len(), completed_on);
    for title in titles {
        result.push_str(&format!("  - {}\n", title));
    }
    result
}
