//! Entity kinds accepted by validation and record preparation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Record kinds with a dedicated validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Actionable item with title, priority, due date and labels.
    Task,
    /// Named grouping of tasks with an optional color.
    Project,
    /// Named tag with an optional color.
    Label,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Project => "project",
            Self::Label => "label",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "task" => Ok(Self::Task),
            "project" => Ok(Self::Project),
            "label" => Ok(Self::Label),
            _ => Err(UnknownEntityKind(value.trim().to_string())),
        }
    }
}

/// Returned when an entity kind string is not `task|project|label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityKind(pub String);

impl Display for UnknownEntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown entity kind `{}`; expected task|project|label",
            self.0
        )
    }
}

impl Error for UnknownEntityKind {}
