use std::fmt;
use std::str::FromStr;

/// Kind of a pending task
///
/// Uses snake_case naming to match the tool argument values.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskKind {
    /// Backlog item with no date; pending on every day until completed
    #[default]
    regular,
    /// Task scheduled for one calendar date
    daily,
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "regular" => Ok(TaskKind::regular),
            "daily" => Ok(TaskKind::daily),
            _ => Err(format!(
                "Invalid task kind '{}'. Valid options are: regular, daily",
                s
            )),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::regular => f.write_str("regular"),
            TaskKind::daily => f.write_str("daily"),
        }
    }
}
