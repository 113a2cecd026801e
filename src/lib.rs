//! Taskboard MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a personal
//! task tracker. Users keep a backlog of regular tasks, schedule daily tasks for
//! specific dates, check them off, and review progress through daily stats, a
//! weekly score, a weekly calendar, and a completion trend.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TaskboardServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `tasks` module - Task store, repository and statistics
//! - **Persistence Layer**: `storage` module - Atomic file-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use taskboard_mcp::TaskboardServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TaskboardServerHandler::new("tasks.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
mod handlers;
pub mod storage;
pub mod tasks;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use error::TaskError;
pub use storage::Storage;
pub use tasks::{DayAgenda, DayStats, HistoryPoint, StatsEngine, TaskKind, TaskRepository, TaskStore};

/// MCP Server handler for the task tracker
///
/// Owns the task repository behind a mutex. Every tool call takes the lock for
/// its whole validate, mutate, save and respond cycle, and every change is
/// written to the TOML file before the call reports success.
pub struct TaskboardServerHandler {
    pub(crate) repository: Mutex<TaskRepository>,
}

impl TaskboardServerHandler {
    /// Create a new taskboard server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the task data file (TOML format)
    ///
    /// # Returns
    /// Result containing the handler or an error. A corrupt data file is an
    /// error; it is never replaced with an empty store.
    ///
    /// # Example
    /// ```no_run
    /// # use taskboard_mcp::TaskboardServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TaskboardServerHandler::new("tasks.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let repository = TaskRepository::open(Storage::new(storage_path))?;
        Ok(Self::from_repository(repository))
    }

    pub fn from_repository(repository: TaskRepository) -> Self {
        Self {
            repository: Mutex::new(repository),
        }
    }

    /// Lock the repository for one request
    pub(crate) fn repository(&self) -> MutexGuard<'_, TaskRepository> {
        // The store is only swapped after a successful save, so a poisoned lock still guards a consistent value
        self.repository
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Personal task tracker with daily and weekly progress.
///
/// Two kinds of tasks:
/// - **regular**: backlog items with no date; they show up on every day until completed
/// - **daily**: tasks scheduled for one date (YYYY-MM-DD)
///
/// Tasks are addressed by their 0-based index in the list shown by `today` or `list`.
/// Indices shift after each completion, so list again before completing more.
/// Completions are logged under the date they were done and feed the progress,
/// weekly_score and trend views.
#[mcp_server]
impl McpServer for TaskboardServerHandler {
    /// **Add Task**: Capture a new task.
    /// **Kinds**: "regular" (default) for backlog items, "daily" for a task on a specific date.
    #[tool]
    async fn add(
        &self,
        /// Title: brief description (must not be blank)
        title: String,
        /// Kind: regular/daily (optional, default regular)
        kind: Option<String>,
        /// Date: YYYY-MM-DD for daily tasks (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_add(title, kind, date).await
    }

    /// **Today**: Show pending regular tasks and today's day tasks with their indices.
    #[tool]
    async fn today(&self) -> McpResult<String> {
        self.handle_list(None).await
    }

    /// **List**: Show pending regular tasks and the day tasks of any date with their indices.
    #[tool]
    async fn list(
        &self,
        /// Date: YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(date).await
    }

    /// **Complete**: Check off tasks by index. Use today/list first to get current indices.
    /// **Batch**: Pass several indices at once; they all refer to the list as currently shown.
    #[tool]
    async fn complete(
        &self,
        /// Kind: regular/daily (optional, default regular)
        kind: Option<String>,
        /// Indices: 0-based positions from today/list output
        indices: Vec<usize>,
        /// Date: YYYY-MM-DD of the day tasks to complete (daily only, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_complete(kind, indices, date).await
    }

    /// **Daily Progress**: Completed, total and remaining tasks for a date.
    #[tool]
    async fn progress(
        &self,
        /// Date: YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_progress(date).await
    }

    /// **Weekly Calendar**: Pending tasks for each day of the week (Monday to Sunday).
    #[tool]
    async fn weekly(
        &self,
        /// Date: any YYYY-MM-DD inside the week (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_weekly(date).await
    }

    /// **Weekly Score**: Percentage of the week's tasks completed (0-100) with a per-day breakdown.
    #[tool]
    async fn weekly_score(
        &self,
        /// Date: any YYYY-MM-DD inside the week (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_weekly_score(date).await
    }

    /// **Trend**: Number of tasks completed per day, oldest first.
    #[tool]
    async fn trend(&self) -> McpResult<String> {
        self.handle_trend().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::local_date_today;
    use tempfile::TempDir;

    fn get_test_handler() -> (TaskboardServerHandler, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.toml");
        let handler = TaskboardServerHandler::new(path.to_str().unwrap()).unwrap();
        (handler, temp_dir)
    }

    #[tokio::test]
    async fn test_add_regular_task() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();
        assert_eq!(result, "Task added: Buy milk (type: regular)");

        let list = handler.handle_list(None).await.unwrap();
        assert!(list.contains("[0] Buy milk"));
    }

    #[tokio::test]
    async fn test_add_daily_task_with_date() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add(
                "Standup".to_string(),
                Some("daily".to_string()),
                Some("2024-06-10".to_string()),
            )
            .await
            .unwrap();
        assert!(result.contains("date: 2024-06-10"));

        let list = handler
            .handle_list(Some("2024-06-10".to_string()))
            .await
            .unwrap();
        assert!(list.contains("[0] Standup"));

        let other_day = handler
            .handle_list(Some("2024-06-11".to_string()))
            .await
            .unwrap();
        assert!(!other_day.contains("Standup"));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler.handle_add("   ".to_string(), None, None).await;
        assert!(result.is_err());
        assert!(handler.repository().list_regular_tasks().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_date_on_regular_task() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add("Buy milk".to_string(), None, Some("2024-06-10".to_string()))
            .await;
        assert!(result.is_err());
        assert!(handler.repository().store().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_kind_and_date() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add("Buy milk".to_string(), Some("weekly".to_string()), None)
            .await;
        assert!(result.is_err());

        let result = handler
            .handle_add(
                "Standup".to_string(),
                Some("daily".to_string()),
                Some("June 10".to_string()),
            )
            .await;
        assert!(result.is_err());
        assert!(handler.repository().store().is_empty());
    }

    #[tokio::test]
    async fn test_complete_regular_task_records_today() {
        let (handler, _temp_dir) = get_test_handler();
        handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();
        handler
            .handle_add("Call mom".to_string(), None, None)
            .await
            .unwrap();

        let result = handler
            .handle_complete(None, vec![1], None)
            .await
            .unwrap();
        assert!(result.contains("Completed 1 task(s)"));
        assert!(result.contains("Call mom"));

        let repository = handler.repository();
        assert_eq!(repository.list_regular_tasks(), ["Buy milk"]);
        assert_eq!(repository.store().completions(local_date_today()), ["Call mom"]);
    }

    #[tokio::test]
    async fn test_complete_daily_tasks_batch() {
        let (handler, _temp_dir) = get_test_handler();
        for title in ["Standup", "Review", "Deploy"] {
            handler
                .handle_add(
                    title.to_string(),
                    Some("daily".to_string()),
                    Some("2024-06-10".to_string()),
                )
                .await
                .unwrap();
        }

        let result = handler
            .handle_complete(
                Some("daily".to_string()),
                vec![2, 0],
                Some("2024-06-10".to_string()),
            )
            .await
            .unwrap();
        assert!(result.contains("Completed 2 task(s)"));

        let list = handler
            .handle_list(Some("2024-06-10".to_string()))
            .await
            .unwrap();
        assert!(list.contains("[0] Review"));
        assert!(!list.contains("Standup"));
        assert!(!list.contains("Deploy"));
    }

    #[tokio::test]
    async fn test_complete_stale_index_changes_nothing() {
        let (handler, _temp_dir) = get_test_handler();
        handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();

        let result = handler.handle_complete(None, vec![0, 1], None).await;
        assert!(result.is_err());

        let result = handler.handle_complete(None, vec![], None).await;
        assert!(result.is_err());

        let repository = handler.repository();
        assert_eq!(repository.list_regular_tasks(), ["Buy milk"]);
        assert!(repository.store().completions(local_date_today()).is_empty());
    }

    #[tokio::test]
    async fn test_complete_rejects_date_on_regular_task() {
        let (handler, _temp_dir) = get_test_handler();
        handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();

        let result = handler
            .handle_complete(
                Some("regular".to_string()),
                vec![0],
                Some("2024-06-10".to_string()),
            )
            .await;
        assert!(result.is_err());

        let repository = handler.repository();
        assert_eq!(repository.list_regular_tasks(), ["Buy milk"]);
        assert!(repository.store().completions(local_date_today()).is_empty());
    }

    #[tokio::test]
    async fn test_progress_scenario() {
        let (handler, _temp_dir) = get_test_handler();
        handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();

        let before = handler.handle_progress(None).await.unwrap();
        assert!(before.contains("Completed: 0"));
        assert!(before.contains("Total tasks: 1"));

        handler
            .handle_complete(None, vec![0], None)
            .await
            .unwrap();

        let after = handler.handle_progress(None).await.unwrap();
        assert!(after.contains("Completed: 1"));
        assert!(after.contains("Total tasks: 0"));
        assert!(after.contains("Remaining: 0"));
    }

    #[tokio::test]
    async fn test_weekly_views() {
        let (handler, _temp_dir) = get_test_handler();
        handler
            .handle_add(
                "Standup".to_string(),
                Some("daily".to_string()),
                Some("2024-06-12".to_string()),
            )
            .await
            .unwrap();

        let agenda = handler
            .handle_weekly(Some("2024-06-12".to_string()))
            .await
            .unwrap();
        assert!(agenda.contains("Wed 12 Jun\n  - Standup"));
        assert!(agenda.contains("Mon 10 Jun\n  (no tasks)"));

        let score = handler
            .handle_weekly_score(Some("2024-06-12".to_string()))
            .await
            .unwrap();
        assert!(score.starts_with("Score: 0/100"));
        assert!(score.contains("Week 2024-06-10 to 2024-06-16"));
    }

    #[tokio::test]
    async fn test_trend() {
        let (handler, _temp_dir) = get_test_handler();
        assert_eq!(handler.handle_trend().await.unwrap(), "No history yet.");

        handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();
        handler
            .handle_complete(None, vec![0], None)
            .await
            .unwrap();

        let trend = handler.handle_trend().await.unwrap();
        assert!(trend.contains(&format!("{}: 1 completed", local_date_today())));
    }

    #[tokio::test]
    async fn test_changes_survive_restart() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.toml");
        let path = path.to_str().unwrap();

        let handler = TaskboardServerHandler::new(path).unwrap();
        handler
            .handle_add("Buy milk".to_string(), None, None)
            .await
            .unwrap();
        drop(handler);

        let reopened = TaskboardServerHandler::new(path).unwrap();
        assert_eq!(reopened.repository().list_regular_tasks(), ["Buy milk"]);
    }

    #[test]
    fn test_corrupt_file_refuses_to_start() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.toml");
        std::fs::write(&path, "regular = [unterminated").unwrap();

        let result = TaskboardServerHandler::new(path.to_str().unwrap());
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::CorruptState { .. })
        ));
        // the file is left as it was
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "regular = [unterminated"
        );
    }
}
