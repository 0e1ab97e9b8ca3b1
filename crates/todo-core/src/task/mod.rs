//! Task domain module.
//!
//! # Module Structure
//!
//! - `model`: `Task`, `TaskId` and `TaskStatus`
//! - `selection`: `Selection` (list/search results) and `TaskFilter`
//!
//! # Usage
//!
//! ```
//! use todo_core::task::{TaskFilter, TaskId};
//! use todo_core::TaskStore;
//!
//! let mut store = TaskStore::new();
//! store.add_task("Buy milk");
//! store.mark_done(TaskId(1)).unwrap();
//! assert_eq!(store.list(TaskFilter::Complete).len(), 1);
//! ```

mod model;
mod selection;

// Re-export public API
pub use model::{Task, TaskId, TaskStatus};
pub use selection::{Selection, TaskFilter};
