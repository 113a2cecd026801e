use crate::error::{Result, TaskError};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregate root of the task tracker
///
/// Holds the regular backlog, the per-date daily tasks, and the append-only
/// completion log. Dates are kept in `BTreeMap`s so iteration is always
/// chronological, which is also the order the TOML file is written in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStore {
    /// Regular tasks in insertion order; identity is the position
    pub(crate) regular: Vec<String>,

    /// Daily tasks keyed by their scheduled date
    ///
    /// A key is removed once its last task is completed, so an absent key and an
    /// empty sequence mean the same thing to every reader.
    pub(crate) daily: BTreeMap<NaiveDate, Vec<String>>,

    /// Titles completed on each date, in completion order. Never shrinks.
    pub(crate) completed: BTreeMap<NaiveDate, Vec<String>>,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskStore {
    /// Create a new empty TaskStore instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending regular tasks in order
    pub fn regular_tasks(&self) -> &[String] {
        &self.regular
    }

    /// Pending daily tasks for `date` (empty when none are scheduled)
    pub fn daily_tasks(&self, date: NaiveDate) -> &[String] {
        self.daily.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Titles completed on `date`
    pub fn completions(&self, date: NaiveDate) -> &[String] {
        self.completed.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All daily task dates with at least one pending task, ascending
    pub fn scheduled_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.daily.keys().copied()
    }

    /// All completion dates with their titles, ascending
    pub fn completion_log(&self) -> impl Iterator<Item = (NaiveDate, &[String])> + '_ {
        self.completed
            .iter()
            .map(|(date, titles)| (*date, titles.as_slice()))
    }

    /// Check whether nothing is pending and nothing was ever completed
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.daily.is_empty() && self.completed.is_empty()
    }

    pub(crate) fn push_regular(&mut self, title: String) {
        self.regular.push(title);
    }

    pub(crate) fn push_daily(&mut self, date: NaiveDate, title: String) {
        self.daily.entry(date).or_default().push(title);
    }

    /// Append a title to the completion log of `date`
    pub(crate) fn record_completion(&mut self, date: NaiveDate, title: String) {
        self.completed.entry(date).or_default().push(title);
    }

    /// Remove the regular task at `index` and return its title
    pub(crate) fn remove_regular(&mut self, index: usize) -> Result<String> {
        let len = self.regular.len();
        if index >= len {
            return Err(TaskError::IndexOutOfRange { index, len });
        }
        Ok(self.regular.remove(index))
    }

    /// Remove the daily task at `index` on `date` and return its title
    pub(crate) fn remove_daily(&mut self, date: NaiveDate, index: usize) -> Result<String> {
        let len = self.daily_tasks(date).len();
        let Some(tasks) = self.daily.get_mut(&date).filter(|_| index < len) else {
            return Err(TaskError::IndexOutOfRange { index, len });
        };
        let title = tasks.remove(index);
        if tasks.is_empty() {
            self.daily.remove(&date);
        }
        Ok(title)
    }

    /// Remove the regular tasks at `indices` and return their titles
    ///
    /// Indices refer to the sequence as it was before the call. Every index is
    /// checked before anything is removed; duplicates are collapsed. Titles are
    /// returned in ascending index order.
    pub(crate) fn take_regular(&mut self, indices: &[usize]) -> Result<Vec<String>> {
        take_positions(&mut self.regular, indices)
    }

    /// Remove the daily tasks at `indices` on `date` and return their titles
    ///
    /// Same contract as [`TaskStore::take_regular`]. Drops the date key when its
    /// sequence becomes empty.
    pub(crate) fn take_daily(&mut self, date: NaiveDate, indices: &[usize]) -> Result<Vec<String>> {
        let Some(tasks) = self.daily.get_mut(&date) else {
            return match indices.first() {
                Some(&index) => Err(TaskError::IndexOutOfRange { index, len: 0 }),
                None => Ok(Vec::new()),
            };
        };

        let titles = take_positions(tasks, indices)?;
        if tasks.is_empty() {
            self.daily.remove(&date);
        }
        Ok(titles)
    }
}

fn take_positions(tasks: &mut Vec<String>, indices: &[usize]) -> Result<Vec<String>> {
    let len = tasks.len();
    if let Some(&index) = indices.iter().find(|&&i| i >= len) {
        return Err(TaskError::IndexOutOfRange { index, len });
    }

    let mut positions = indices.to_vec();
    positions.sort_unstable();
    positions.dedup();

    let titles = positions.iter().map(|&i| tasks[i].clone()).collect();

    // Remove back to front so earlier positions stay valid
    for &i in positions.iter().rev() {
        tasks.remove(i);
    }

    Ok(titles)
}
