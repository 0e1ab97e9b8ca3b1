use tracing::{debug, warn};

use crate::error::{Result, TodoError};
use crate::task::{Selection, Task, TaskFilter, TaskId};

/// Counts of tasks by completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

/// The in-memory task list for one session.
///
/// `TaskStore` owns the tasks in insertion order together with the counter
/// that issues their ids. Ids start at 1 and increase by one per
/// [`add_task`](Self::add_task); there is no deletion, so the store only
/// ever grows.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    /// Creates an empty store whose first task will get id 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_core::TaskStore;
    ///
    /// let store = TaskStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task and returns it.
    ///
    /// The text is stored as given; trimming user input is the caller's job.
    /// Empty text is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_core::{TaskStore, task::TaskId};
    ///
    /// let mut store = TaskStore::new();
    /// assert_eq!(store.add_task("Buy milk").id, TaskId(1));
    /// assert_eq!(store.add_task("Call mom").id, TaskId(2));
    /// ```
    pub fn add_task(&mut self, text: &str) -> &Task {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        debug!(task_id = id.get(), "task added");

        let index = self.tasks.len();
        self.tasks.push(Task::new(id, text));
        &self.tasks[index]
    }

    pub fn list_all(&self) -> Selection<'_> {
        self.list(TaskFilter::All)
    }

    pub fn list_incomplete(&self) -> Selection<'_> {
        self.list(TaskFilter::Incomplete)
    }

    pub fn list_complete(&self) -> Selection<'_> {
        self.list(TaskFilter::Complete)
    }

    /// Lists the tasks accepted by `filter`, in insertion order.
    pub fn list(&self, filter: TaskFilter) -> Selection<'_> {
        Selection::collect(
            self.tasks.is_empty(),
            self.tasks.iter().filter(|task| filter.accepts(task)),
        )
    }

    /// Finds tasks whose text contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidArgument` when `term` is empty or only
    /// whitespace.
    pub fn search(&self, term: &str) -> Result<Selection<'_>> {
        if term.trim().is_empty() {
            warn!("rejected empty search term");
            return Err(TodoError::invalid_argument("search term cannot be empty"));
        }

        let needle = term.to_lowercase();
        let selection = Selection::collect(
            self.tasks.is_empty(),
            self.tasks.iter().filter(|task| task.matches_lowercase(&needle)),
        );
        debug!(term, matches = selection.len(), "search finished");
        Ok(selection)
    }

    /// Marks the task with `id` as done and returns it.
    ///
    /// Marking a task that is already done succeeds without changes.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::TaskNotFound` if no task has this id; the store is
    /// left untouched.
    pub fn mark_done(&mut self, id: TaskId) -> Result<&Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            warn!(task_id = id.get(), "mark_done on unknown task");
            return Err(TodoError::task_not_found(id.get()));
        };

        if !task.done {
            task.done = true;
            debug!(task_id = id.get(), "task marked as done");
        }
        Ok(task)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> TaskStats {
        let done = self.tasks.iter().filter(|task| task.done).count();
        TaskStats {
            total: self.tasks.len(),
            pending: self.tasks.len() - done,
            done,
        }
    }
}
