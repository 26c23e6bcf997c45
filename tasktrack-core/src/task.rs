//! Task entity types for `Tasktrack`.
//!
//! A [`Task`] enforces its own field invariants: the title is never blank,
//! a due date never precedes the creation time, and status and priority are
//! closed enumerations. Identity is carried by [`TaskId`] alone, so two
//! tasks with equal ids compare equal regardless of their other fields.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ValidationError;

/// Format used when rendering due dates in [`Task`]'s `Display` output.
pub const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ValidationError::InvalidTaskId(s.trim().to_string()))
    }
}

/// Lifecycle stage of a task. Any status may be set to any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    Pending,
    /// Actively being worked on.
    InProgress,
    /// Finished.
    Completed,
    /// Abandoned; will not be done.
    Cancelled,
}

impl TaskStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the snake_case label used for display and parsing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .ok_or_else(|| ValidationError::UnknownStatus(s.trim().to_string()))
    }
}

/// Relative urgency of a task, ordered from `Low` to `Urgent`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    #[default]
    Low,
    /// Moderate importance.
    Medium,
    /// Needs attention soon.
    High,
    /// Needs attention immediately.
    Urgent,
}

impl Priority {
    /// Every priority, from lowest to highest.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Returns the snake_case label used for display and parsing.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|priority| priority.label() == label)
            .ok_or_else(|| ValidationError::UnknownPriority(s.trim().to_string()))
    }
}

/// Lowercases and maps `-` and spaces to `_`, so `In Progress` reads as `in_progress`.
fn normalize_label(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// A single tracked task.
///
/// Fields are private; every mutation goes through a validating setter so a
/// `Task` value always satisfies its invariants.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    created_at: NaiveDateTime,
    due_at: Option<NaiveDateTime>,
    status: TaskStatus,
    priority: Priority,
}

impl Task {
    /// Creates a new pending task stamped with the current local time.
    ///
    /// A missing description becomes `""` and a missing priority becomes
    /// [`Priority::Low`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleEmpty`] if the title is blank, or
    /// [`ValidationError::DueBeforeCreation`] if `due_at` is already in the past.
    pub fn create(
        title: impl Into<String>,
        description: Option<String>,
        due_at: Option<NaiveDateTime>,
        priority: Option<Priority>,
    ) -> Result<Self, ValidationError> {
        Self::create_at(now(), title, description, due_at, priority)
    }

    /// Same as [`create`](Self::create) with an explicit creation time.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub fn create_at(
        created_at: NaiveDateTime,
        title: impl Into<String>,
        description: Option<String>,
        due_at: Option<NaiveDateTime>,
        priority: Option<Priority>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        validate_due(due_at, created_at)?;

        Ok(Self {
            id: TaskId::new(),
            title,
            description: description.unwrap_or_default(),
            created_at,
            due_at,
            status: TaskStatus::Pending,
            priority: priority.unwrap_or_default(),
        })
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    #[must_use]
    pub const fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_at
    }

    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleEmpty`] if the new title is blank; the
    /// previous title is kept.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Replaces the description; `None` clears it to `""`.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description.unwrap_or_default();
    }

    /// Sets or clears the due date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DueBeforeCreation`] if `due_at` precedes the
    /// creation time; the previous due date is kept.
    pub fn set_due_at(&mut self, due_at: Option<NaiveDateTime>) -> Result<(), ValidationError> {
        validate_due(due_at, self.created_at)?;
        self.due_at = due_at;
        Ok(())
    }

    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Renders the task like `Display`, formatting the due date with `datetime_format`.
    ///
    /// The format must be a valid `chrono` strftime string; an invalid one makes
    /// formatting fail with [`fmt::Error`].
    #[must_use]
    pub const fn display_with<'a>(&'a self, datetime_format: &'a str) -> TaskDisplay<'a> {
        TaskDisplay {
            task: self,
            datetime_format,
        }
    }

    /// Returns `true` if a due date is set and the current local time is past it.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(now())
    }

    /// Returns `true` if a due date is set and strictly earlier than `now`.
    #[must_use]
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        self.due_at.is_some_and(|due| due < now)
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(DISPLAY_DATETIME_FORMAT).fmt(f)
    }
}

/// `Display` adapter rendering a task's due date with a caller-chosen format.
///
/// Created by [`Task::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct TaskDisplay<'a> {
    task: &'a Task,
    datetime_format: &'a str,
}

impl fmt::Display for TaskDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.task;
        write!(
            f,
            "{} \"{}\" [status: {}, priority: {}, due: ",
            task.id, task.title, task.status, task.priority
        )?;
        match task.due_at {
            Some(due) => write!(f, "{}]", due.format(self.datetime_format)),
            None => f.write_str("none]"),
        }
    }
}

/// Current local wall-clock time.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    Ok(())
}

fn validate_due(
    due_at: Option<NaiveDateTime>,
    created_at: NaiveDateTime,
) -> Result<(), ValidationError> {
    match due_at {
        Some(due) if due < created_at => Err(ValidationError::DueBeforeCreation {
            due,
            created: created_at,
        }),
        _ => Ok(()),
    }
}
