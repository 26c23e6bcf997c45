//! In-memory task collection for `Tasktrack`.
//!
//! [`TaskManager`] owns the tasks of one session in insertion order and
//! answers lookups and filters with owned snapshots. [`SharedTaskManager`]
//! puts a single lock in front of it for callers on several threads.

pub mod manager;
pub mod shared;

pub use manager::TaskManager;
pub use shared::SharedTaskManager;
