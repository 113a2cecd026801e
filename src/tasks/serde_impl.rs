//! Serialization and deserialization implementations for TaskStore
//!
//! The on-disk layout keeps the three collections under the keys `regular`,
//! `daily` and `completed`, with dates written as `YYYY-MM-DD` table keys:
//!
//! ```toml
//! format_version = 1
//! regular = ["Buy milk"]
//!
//! [daily]
//! "2024-06-10" = ["Standup"]
//!
//! [completed]
//! "2024-06-09" = ["Pay rent"]
//! ```
//!
//! Files without `format_version` use the same keys and are read as-is.
//! Unknown keys and non-canonical dates are rejected rather than dropped.

use super::task_store::TaskStore;
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Format version written by this crate
pub const CURRENT_FORMAT_VERSION: u32 = 1;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskStoreFile {
    #[serde(default)]
    format_version: u32,
    #[serde(default)]
    regular: Vec<String>,
    #[serde(default)]
    daily: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    completed: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize)]
struct TaskStoreFileRef<'a> {
    format_version: u32,
    regular: &'a [String],
    daily: BTreeMap<String, &'a [String]>,
    completed: BTreeMap<String, &'a [String]>,
}

impl Serialize for TaskStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TaskStoreFileRef {
            format_version: CURRENT_FORMAT_VERSION,
            regular: &self.regular,
            daily: date_keys_to_strings(&self.daily),
            completed: date_keys_to_strings(&self.completed),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaskStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let file = TaskStoreFile::deserialize(deserializer)?;

        if file.format_version > CURRENT_FORMAT_VERSION {
            return Err(D::Error::custom(format!(
                "unsupported format_version {} (this build reads up to {})",
                file.format_version, CURRENT_FORMAT_VERSION
            )));
        }

        Ok(TaskStore {
            regular: file.regular,
            daily: parse_date_keys(file.daily, "daily").map_err(D::Error::custom)?,
            completed: parse_date_keys(file.completed, "completed").map_err(D::Error::custom)?,
        })
    }
}

fn date_keys_to_strings(map: &BTreeMap<NaiveDate, Vec<String>>) -> BTreeMap<String, &[String]> {
    map.iter()
        .map(|(date, titles)| (date.format(DATE_FORMAT).to_string(), titles.as_slice()))
        .collect()
}

fn parse_date_keys(
    map: BTreeMap<String, Vec<String>>,
    table: &str,
) -> Result<BTreeMap<NaiveDate, Vec<String>>, String> {
    let mut parsed = BTreeMap::new();
    for (key, titles) in map {
        let date = NaiveDate::parse_from_str(&key, DATE_FORMAT)
            .ok()
            .filter(|date| date.format(DATE_FORMAT).to_string() == key)
            .ok_or_else(|| format!("invalid date key '{}' in [{}], expected YYYY-MM-DD", key, table))?;
        parsed.insert(date, titles);
    }
    Ok(parsed)
}
