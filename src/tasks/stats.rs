//! Read-only statistics derived from a [`TaskStore`]
//!
//! Regular tasks have no date, so they count as pending on every day that is
//! queried. Completing one removes it from every day's total while its title
//! stays in the completion log of the day it was done; a day can therefore
//! report more completions than pending tasks.

use super::task_store::TaskStore;
use chrono::{Datelike, Duration, NaiveDate};

/// Completed/pending counts for one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStats {
    pub date: NaiveDate,
    /// Titles in the completion log for `date`
    pub completed: usize,
    /// Pending regular tasks plus pending daily tasks of `date`
    pub total: usize,
}

impl DayStats {
    /// Pending tasks not yet matched by a completion, never below zero
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Abbreviated weekday name (`Mon`..`Sun`)
    pub fn label(&self) -> String {
        self.date.format("%a").to_string()
    }
}

/// One point of the completion trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub completed: usize,
}

/// Pending task titles shown for one day of the week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAgenda<'a> {
    pub date: NaiveDate,
    /// Regular tasks first, then the daily tasks of `date`
    pub tasks: Vec<&'a str>,
}

pub struct StatsEngine<'a> {
    store: &'a TaskStore,
}

impl<'a> StatsEngine<'a> {
    pub fn new(store: &'a TaskStore) -> Self {
        Self { store }
    }

    pub fn day_stats(&self, date: NaiveDate) -> DayStats {
        DayStats {
            date,
            completed: self.store.completions(date).len(),
            total: self.store.regular_tasks().len() + self.store.daily_tasks(date).len(),
        }
    }

    /// Monday of the week containing `date`
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
    }

    /// The seven dates Monday..Sunday of the week containing `reference`
    pub fn week_dates(reference: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        let monday = Self::week_start(reference);
        (0..7).map(move |offset| monday + Duration::days(offset))
    }

    /// Day stats for Monday..Sunday of the week containing `reference`
    pub fn week_stats(&self, reference: NaiveDate) -> Vec<DayStats> {
        Self::week_dates(reference)
            .map(|date| self.day_stats(date))
            .collect()
    }

    /// Percentage of the week's tasks completed, floored and clamped to 0..=100
    pub fn weekly_score(&self, reference: NaiveDate) -> u8 {
        let week = self.week_stats(reference);
        let completed: usize = week.iter().map(|day| day.completed).sum();
        let total: usize = week.iter().map(|day| day.total).sum();
        score(completed, total)
    }

    /// Completions per date, oldest first
    pub fn completion_history(&self) -> Vec<HistoryPoint> {
        let mut history: Vec<HistoryPoint> = self
            .store
            .completion_log()
            .map(|(date, titles)| HistoryPoint {
                date,
                completed: titles.len(),
            })
            .collect();
        history.sort_by_key(|point| point.date);
        history
    }

    /// Pending tasks per day for the week containing `reference`
    pub fn week_agenda(&self, reference: NaiveDate) -> Vec<DayAgenda<'a>> {
        let store = self.store;
        Self::week_dates(reference)
            .map(move |date| DayAgenda {
                date,
                tasks: store
                    .regular_tasks()
                    .iter()
                    .chain(store.daily_tasks(date))
                    .map(String::as_str)
                    .collect(),
            })
            .collect()
    }
}

fn score(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = completed.saturating_mul(100) / total;
    // min(100) guarantees the value fits
    percent.min(100) as u8
}
