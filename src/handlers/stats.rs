//! Statistics handlers for taskboard MCP server

use crate::TaskboardServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TaskboardServerHandler {
    /// Daily progress: completed, total and remaining for one date.
    pub async fn handle_progress(&self, date: Option<String>) -> McpResult<String> {
        let day = validation::parse_date_or_today(date.as_deref())?;

        let repository = self.repository();
        let stats = repository.stats().day_stats(day);
        Ok(formatting::format_day_stats(&stats))
    }

    /// Weekly calendar: pending tasks for each day Monday to Sunday.
    pub async fn handle_weekly(&self, date: Option<String>) -> McpResult<String> {
        let day = validation::parse_date_or_today(date.as_deref())?;

        let repository = self.repository();
        let agenda = repository.stats().week_agenda(day);
        Ok(formatting::format_agenda(&agenda))
    }

    /// Weekly score with the per-day breakdown.
    pub async fn handle_weekly_score(&self, date: Option<String>) -> McpResult<String> {
        let day = validation::parse_date_or_today(date.as_deref())?;

        let repository = self.repository();
        let engine = repository.stats();
        let week = engine.week_stats(day);
        let score = engine.weekly_score(day);
        Ok(formatting::format_weekly_score(score, &week))
    }

    /// Completion trend, oldest date first.
    pub async fn handle_trend(&self) -> McpResult<String> {
        let repository = self.repository();
        let history = repository.stats().completion_history();
        Ok(formatting::format_history(&history))
    }
}
