//! Task data model for `Tasktrack`.
//!
//! Holds the validated [`Task`](task::Task) entity, its identifier and the
//! closed status/priority enumerations shared by the manager and console.

pub mod error;
pub mod task;

pub use error::ValidationError;
pub use task::{Priority, Task, TaskDisplay, TaskId, TaskStatus};
