//! List handlers for taskboard MCP server

use crate::TaskboardServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TaskboardServerHandler {
    /// Lists pending regular tasks and the day tasks of `date` (default today) with their indices.
    pub async fn handle_list(&self, date: Option<String>) -> McpResult<String> {
        let day = validation::parse_date_or_today(date.as_deref())?;

        let repository = self.repository();
        Ok(formatting::format_pending(
            day,
            repository.list_regular_tasks(),
            repository.list_daily_tasks(day),
        ))
    }
}
