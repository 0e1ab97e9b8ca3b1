//! Task domain model.
//!
//! A task is a single to-do item: a sequential id, free-form text and a
//! completion flag that only ever goes from pending to done.

use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;

/// Identifier of a task within one store.
///
/// Ids are issued by [`TaskStore`](crate::TaskStore) starting at 1 and are
/// never reused. Zero and negative values are well-formed but never match a
/// task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a task id typed by the user.
///
/// Any integer is accepted, including `0` and negatives, which then fail
/// lookup with `TaskNotFound`. Anything else (`abc`, `1.5`, `3abc`) is an
/// `InvalidId`. Callers are expected to trim surrounding whitespace first.
impl FromStr for TaskId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(TaskId)
            .map_err(|_| TodoError::invalid_id(s))
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Created and not yet done.
    Pending,
    /// Marked as done. There is no way back to `Pending`.
    Done,
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Sequential identifier, unique within the store.
    pub id: TaskId,
    /// The task description, stored verbatim.
    pub text: String,
    /// Whether the task has been marked as done.
    pub done: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    pub fn status(&self) -> TaskStatus {
        if self.done {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }

    /// Case-insensitive substring match against the task text.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
    }
}
