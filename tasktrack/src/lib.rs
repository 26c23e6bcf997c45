//! `Tasktrack` in-memory task tracker library.

pub mod config;
pub mod console;
pub mod tasks;
