use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Task priority. Affects display color only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Medium,
    High,
}

impl Priority {
    /// All priorities in menu order
    pub const ALL: [Priority; 3] = [Priority::Normal, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Capitalized label used in menus
    pub fn label(self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a priority name, falling back to `Normal` for anything unknown.
    pub fn from_name_lossy(name: &str) -> Priority {
        name.parse().unwrap_or_default()
    }

    /// Next priority in menu order, wrapping around
    pub fn next(self) -> Priority {
        match self {
            Priority::Normal => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Normal,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Priority::Normal),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// A single to-do entry. Tasks have no id; their index in the list is
/// the only handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

impl Task {
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Task {
            text: text.into(),
            completed: false,
            priority,
        }
    }
}

/// Every shape a task has been stored in over time.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTask {
    /// Oldest format: the task text alone
    Legacy(String),
    Record {
        text: String,
        #[serde(default)]
        completed: bool,
        #[serde(default)]
        priority: Option<String>,
    },
}

impl From<StoredTask> for Task {
    fn from(stored: StoredTask) -> Self {
        match stored {
            StoredTask::Legacy(text) => Task::new(text, Priority::Normal),
            StoredTask::Record {
                text,
                completed,
                priority,
            } => Task {
                text,
                completed,
                priority: priority
                    .as_deref()
                    .map(Priority::from_name_lossy)
                    .unwrap_or_default(),
            },
        }
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StoredTask::deserialize(deserializer).map(Task::from)
    }
}
