//! Validation helper functions for the taskboard MCP server
//!
//! This module contains the checks applied at the request boundary: task
//! titles, task kinds, dates, and completion indices.

use crate::error::{Result, TaskError};
use crate::tasks::{TaskKind, local_date_today};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Reject a task title that is empty or whitespace-only
///
/// # Returns
/// The title exactly as given, or `TaskError::InvalidTask`
pub fn validate_title(title: &str) -> Result<String> {
    if title.trim().is_empty() {
        return Err(TaskError::InvalidTask);
    }
    Ok(title.to_string())
}

/// Parse the optional task kind parameter, defaulting to `regular`
pub fn parse_kind(kind: Option<&str>) -> McpResult<TaskKind> {
    let Some(kind) = kind else {
        return Ok(TaskKind::default());
    };
    kind.parse::<TaskKind>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Parse and validate a date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ),
            true,
        )
    })
}

/// Parse an optional date parameter, falling back to today's local date
pub fn parse_date_or_today(date_str: Option<&str>) -> McpResult<NaiveDate> {
    match date_str {
        Some(s) if !s.trim().is_empty() => parse_date(s),
        _ => Ok(local_date_today()),
    }
}

/// Reject an empty index list before touching the store
pub fn require_indices(indices: &[usize]) -> McpResult<()> {
    if indices.is_empty() {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                "No indices provided. Use today() or list() to see task indices.",
                true,
            ),
        );
    }
    Ok(())
}
