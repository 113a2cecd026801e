use super::stats::StatsEngine;
use super::task_store::TaskStore;
use super::{TaskKind, local_date_today};
use crate::error::Result;
use crate::storage::Storage;
use crate::validation;
use chrono::NaiveDate;
use tracing::info;

/// Validated, persisted access to a [`TaskStore`]
///
/// The repository owns the canonical in-memory store. Each mutation is applied
/// to a copy, the copy is saved, and only a successful save makes it current,
/// so a storage failure never leaves memory ahead of disk.
pub struct TaskRepository {
    storage: Storage,
    store: TaskStore,
}

impl TaskRepository {
    /// Load the store behind `storage`
    pub fn open(storage: Storage) -> Result<Self> {
        let store = storage.load()?;
        Ok(Self { storage, store })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Statistics over the current store
    pub fn stats(&self) -> StatsEngine<'_> {
        StatsEngine::new(&self.store)
    }

    pub fn list_regular_tasks(&self) -> &[String] {
        self.store.regular_tasks()
    }

    pub fn list_daily_tasks(&self, date: NaiveDate) -> &[String] {
        self.store.daily_tasks(date)
    }

    /// Add a task to the regular backlog
    pub fn add_regular_task(&mut self, title: &str) -> Result<()> {
        let title = validation::validate_title(title)?;
        self.apply(|store| {
            store.push_regular(title.clone());
            Ok(())
        })?;
        info!(kind = %TaskKind::regular, title = %title, "task added");
        Ok(())
    }

    /// Add a task scheduled for `date`
    pub fn add_daily_task(&mut self, title: &str, date: NaiveDate) -> Result<()> {
        let title = validation::validate_title(title)?;
        self.apply(|store| {
            store.push_daily(date, title.clone());
            Ok(())
        })?;
        info!(kind = %TaskKind::daily, %date, title = %title, "task added");
        Ok(())
    }

    /// Complete the regular task at `index`, recording it under today's date
    pub fn complete_regular_task(&mut self, index: usize) -> Result<String> {
        self.complete_regular_task_on(index, local_date_today())
    }

    pub fn complete_regular_task_on(&mut self, index: usize, completed_on: NaiveDate) -> Result<String> {
        let title = self.apply(|store| {
            let title = store.remove_regular(index)?;
            store.record_completion(completed_on, title.clone());
            Ok(title)
        })?;
        info!(kind = %TaskKind::regular, index, %completed_on, title = %title, "task completed");
        Ok(title)
    }

    /// Complete the daily task at `index` on `date`, recording it under today's date
    pub fn complete_daily_task(&mut self, date: NaiveDate, index: usize) -> Result<String> {
        self.complete_daily_task_on(date, index, local_date_today())
    }

    pub fn complete_daily_task_on(
        &mut self,
        date: NaiveDate,
        index: usize,
        completed_on: NaiveDate,
    ) -> Result<String> {
        let title = self.apply(|store| {
            let title = store.remove_daily(date, index)?;
            store.record_completion(completed_on, title.clone());
            Ok(title)
        })?;
        info!(kind = %TaskKind::daily, %date, index, %completed_on, title = %title, "task completed");
        Ok(title)
    }

    /// Complete several regular tasks at once
    ///
    /// `indices` all refer to the backlog as it is now. Either every index is
    /// valid and all of them complete, or nothing changes.
    pub fn complete_regular_tasks(
        &mut self,
        indices: &[usize],
        completed_on: NaiveDate,
    ) -> Result<Vec<String>> {
        let titles = self.apply(|store| {
            let titles = store.take_regular(indices)?;
            for title in &titles {
                store.record_completion(completed_on, title.clone());
            }
            Ok(titles)
        })?;
        info!(kind = %TaskKind::regular, count = titles.len(), %completed_on, "tasks completed");
        Ok(titles)
    }

    /// Complete several daily tasks of `date` at once; same contract as
    /// [`TaskRepository::complete_regular_tasks`]
    pub fn complete_daily_tasks(
        &mut self,
        date: NaiveDate,
        indices: &[usize],
        completed_on: NaiveDate,
    ) -> Result<Vec<String>> {
        let titles = self.apply(|store| {
            let titles = store.take_daily(date, indices)?;
            for title in &titles {
                store.record_completion(completed_on, title.clone());
            }
            Ok(titles)
        })?;
        info!(kind = %TaskKind::daily, %date, count = titles.len(), %completed_on, "tasks completed");
        Ok(titles)
    }

    fn apply<T>(&mut self, mutate: impl FnOnce(&mut TaskStore) -> Result<T>) -> Result<T> {
        let mut next = self.store.clone();
        let out = mutate(&mut next)?;
        self.storage.save(&next)?;
        self.store = next;
        Ok(out)
    }
}
