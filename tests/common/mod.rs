//! Common test utilities for integration tests

use chrono::NaiveDate;
use std::path::PathBuf;
use taskboard_mcp::{Storage, TaskRepository};
use tempfile::TempDir;

/// Create a repository backed by a fresh data file in a temporary directory
pub fn get_test_repository() -> (TaskRepository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let repository = TaskRepository::open(Storage::new(data_path(&temp_dir))).unwrap();
    (repository, temp_dir)
}

/// Path of the data file inside a test directory
pub fn data_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("tasks.toml")
}

/// Shorthand for a calendar date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
