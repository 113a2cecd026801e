//! Task domain models and business logic
//!
//! This module contains the core task tracker data structures.
//! It is split into submodules:
//! - `task_kind`: Regular vs. daily task discriminator
//! - `task_store`: The aggregate root holding pending tasks and the completion log
//! - `repository`: Validated, persisted mutations over the store
//! - `stats`: Read-only day/week/history statistics
//! - `serde_impl`: Versioned on-disk format for the store

mod repository;
mod serde_impl;
mod stats;
mod task_kind;
mod task_store;

pub use repository::TaskRepository;
pub use serde_impl::CURRENT_FORMAT_VERSION;
pub use stats::{DayAgenda, DayStats, HistoryPoint, StatsEngine};
pub use task_kind::TaskKind;
pub use task_store::TaskStore;

use chrono::{Local, NaiveDate};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}
