//! Add handler for taskboard MCP server

use super::reject;
use crate::TaskboardServerHandler;
use crate::tasks::TaskKind;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskboardServerHandler {
    /// **Add**: Capture a new task.
    /// **Kinds**: "regular" stays on the list every day until completed; "daily" belongs to one date.
    pub async fn handle_add(
        &self,
        title: String,
        kind: Option<String>,
        date: Option<String>,
    ) -> McpResult<String> {
        let kind = validation::parse_kind(kind.as_deref())?;

        if kind == TaskKind::regular && date.is_some() {
            bail_public!(
                _,
                "Regular tasks have no date. Use kind=\"daily\" to schedule a task for {}.",
                date.unwrap_or_default()
            );
        }

        let scheduled = match kind {
            TaskKind::regular => None,
            TaskKind::daily => Some(validation::parse_date_or_today(date.as_deref())?),
        };

        let mut repository = self.repository();
        let result = match scheduled {
            None => repository.add_regular_task(&title),
            Some(day) => repository.add_daily_task(&title, day),
        };
        drop(repository);

        if let Err(e) = result {
            return reject(e);
        }

        Ok(match scheduled {
            None => format!("Task added: {} (type: regular)", title),
            Some(day) => format!("Task added: {} (type: daily, date: {})", title, day),
        })
    }
}
