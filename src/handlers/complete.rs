//! Complete handler for taskboard MCP server

use super::reject;
use crate::TaskboardServerHandler;
use crate::formatting;
use crate::tasks::{TaskKind, local_date_today};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskboardServerHandler {
    /// **Complete**: Check off one or more pending tasks by index.
    /// **Batch**: All indices refer to the list as currently shown; if any is stale, nothing is completed.
    /// Completions are recorded under today's date.
    pub async fn handle_complete(
        &self,
        kind: Option<String>,
        indices: Vec<usize>,
        date: Option<String>,
    ) -> McpResult<String> {
        let kind = validation::parse_kind(kind.as_deref())?;
        validation::require_indices(&indices)?;

        if kind == TaskKind::regular && date.is_some() {
            bail_public!(
                _,
                "Regular tasks have no date. Use kind=\"daily\" to complete day tasks of {}.",
                date.unwrap_or_default()
            );
        }

        let today = local_date_today();
        let mut repository = self.repository();
        let result = match kind {
            TaskKind::regular => repository.complete_regular_tasks(&indices, today),
            TaskKind::daily => {
                let scheduled = validation::parse_date_or_today(date.as_deref())?;
                repository.complete_daily_tasks(scheduled, &indices, today)
            }
        };
        drop(repository);

        match result {
            Ok(titles) => Ok(formatting::format_completed(&titles, today)),
            Err(e) => reject(e),
        }
    }
}
