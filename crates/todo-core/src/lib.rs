pub mod config;
pub mod error;
pub mod store;
pub mod task;

// Re-export common types
pub use config::TodoConfig;
pub use error::TodoError;
pub use store::{TaskStats, TaskStore};
