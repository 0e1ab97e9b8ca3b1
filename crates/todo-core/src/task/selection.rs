//! Results of list and search operations.

use super::model::Task;

/// Which subset of tasks a listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Incomplete,
    Complete,
}

impl TaskFilter {
    pub(crate) fn accepts(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Incomplete => !task.done,
            Self::Complete => task.done,
        }
    }
}

/// The outcome of a list or search call.
///
/// An empty store and a filter that matched nothing are reported as
/// different variants so callers can word their messages accordingly.
/// `Matches` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The store holds no tasks at all.
    NoTasks,
    /// The store has tasks but none satisfied the filter or search term.
    NoMatches,
    /// Matching tasks in insertion order.
    Matches(Vec<&'a Task>),
}

impl<'a> Selection<'a> {
    pub(crate) fn collect<I>(store_is_empty: bool, tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        if store_is_empty {
            return Self::NoTasks;
        }
        let matches: Vec<&'a Task> = tasks.into_iter().collect();
        if matches.is_empty() {
            Self::NoMatches
        } else {
            Self::Matches(matches)
        }
    }

    pub fn tasks(&self) -> &[&'a Task] {
        match self {
            Self::Matches(tasks) => tasks,
            Self::NoTasks | Self::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.tasks().len()
    }

    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Matches(_))
    }

    pub fn into_vec(self) -> Vec<&'a Task> {
        match self {
            Self::Matches(tasks) => tasks,
            Self::NoTasks | Self::NoMatches => Vec::new(),
        }
    }
}

impl<'a> IntoIterator for Selection<'a> {
    type Item = &'a Task;
    type IntoIter = std::vec::IntoIter<&'a Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
