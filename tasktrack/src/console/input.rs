//! Parsing of raw console lines into menu choices and task field values.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tasktrack_core::ValidationError;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    RemoveTask,
    FindTask,
    ListByStatus,
    ListByPriority,
    ListAll,
    UpdateStatus,
    ListOverdue,
    Exit,
}

impl MenuChoice {
    /// Every choice in menu order; the 1-based position is the option number.
    pub const ALL: [Self; 9] = [
        Self::AddTask,
        Self::RemoveTask,
        Self::FindTask,
        Self::ListByStatus,
        Self::ListByPriority,
        Self::ListAll,
        Self::UpdateStatus,
        Self::ListOverdue,
        Self::Exit,
    ];

    /// Menu label shown next to the option number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddTask => "Add task",
            Self::RemoveTask => "Remove task",
            Self::FindTask => "Find task by id",
            Self::ListByStatus => "List tasks by status",
            Self::ListByPriority => "List tasks by priority",
            Self::ListAll => "List all tasks",
            Self::UpdateStatus => "Update task status",
            Self::ListOverdue => "List overdue tasks",
            Self::Exit => "Exit",
        }
    }

    /// Parses an option number, or `exit`/`quit` in any case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            return Some(Self::Exit);
        }
        let number: usize = input.parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }
}

/// Parses a due date; blank input means "no due date".
///
/// A format without a time of day (such as `%Y-%m-%d`) yields midnight of the
/// given date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDateTime`] if non-blank input does not
/// match `format`.
pub fn parse_due(input: &str, format: &str) -> Result<Option<NaiveDateTime>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(input, format)
        .or_else(|_| {
            NaiveDate::parse_from_str(input, format).map(|date| date.and_time(NaiveTime::MIN))
        })
        .map(Some)
        .map_err(|_| ValidationError::InvalidDateTime {
            input: input.to_string(),
            format: format.to_string(),
        })
}

/// Returns `true` if `format` can both render a date/time and read it back
/// through [`parse_due`].
#[must_use]
pub fn is_usable_format(format: &str) -> bool {
    let sample = NaiveDate::from_ymd_opt(2026, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 26, 53));
    let Some(rendered) = sample.and_then(|at| render(at, format)) else {
        return false;
    };
    matches!(parse_due(&rendered, format), Ok(Some(_)))
}

/// Drops whatever precision `format` cannot express, so `at` compares
/// equal to a due date typed in the same minute (or day, for date-only formats).
///
/// Returns `at` unchanged if `format` cannot round-trip it.
#[must_use]
pub fn truncate_to_format(at: NaiveDateTime, format: &str) -> NaiveDateTime {
    render(at, format)
        .and_then(|rendered| parse_due(&rendered, format).ok().flatten())
        .filter(|truncated| *truncated <= at)
        .unwrap_or(at)
}

/// Formats `at`, or `None` if `format` holds an invalid or unsupported specifier.
fn render(at: NaiveDateTime, format: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", at.format_with_items(items.iter())).ok()?;
    Some(rendered)
}

/// Parses a value, treating blank input as `None`.
///
/// # Errors
///
/// Returns the value type's parse error for non-blank input it rejects.
pub fn parse_optional<T: FromStr>(input: &str) -> Result<Option<T>, T::Err> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input.parse().map(Some)
}

/// Renders a `chrono` format as a human hint, e.g. `%Y-%m-%d %H:%M` as `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn format_hint(format: &str) -> String {
    format
        .replace("%Y", "YYYY")
        .replace("%m", "MM")
        .replace("%d", "DD")
        .replace("%H", "HH")
        .replace("%M", "MM")
        .replace("%S", "SS")
}
