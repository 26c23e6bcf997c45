//! Property-based tests for the task entity.
//!
//! Uses proptest to verify:
//! 1. Any title with a non-whitespace character creates a pending task.
//! 2. Whitespace-only titles are always rejected.
//! 3. Due dates before creation are rejected and leave the task unchanged.
//! 4. Overdue holds exactly when the clock is strictly past the due date.
//! 5. Equal field values never produce equal tasks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use tasktrack_core::{Priority, Task, TaskStatus, ValidationError};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .expect("valid date")
        .and_hms_opt(8, 0, 0)
        .expect("valid time")
}

/// Strategy for titles that contain at least one visible character.
fn arb_title() -> impl Strategy<Value = String> {
    "[ \t]{0,4}[A-Za-z0-9àéñ#!][A-Za-z0-9 àéñ#!]{0,60}"
}

/// Strategy for titles made only of whitespace (including the empty string).
fn arb_blank_title() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,12}"
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop::sample::select(TaskStatus::ALL.to_vec())
}

proptest! {
    #[test]
    fn valid_title_creates_pending_task(title in arb_title(), priority in arb_priority()) {
        let task = Task::create_at(base_time(), title.clone(), None, None, Some(priority)).unwrap();
        prop_assert_eq!(task.title(), title.as_str());
        prop_assert_eq!(task.status(), TaskStatus::Pending);
        prop_assert_eq!(task.priority(), priority);
        prop_assert!(!task.id().as_uuid().is_nil());
    }

    #[test]
    fn blank_title_is_rejected(title in arb_blank_title()) {
        prop_assert_eq!(
            Task::create_at(base_time(), title.clone(), None, None, None).unwrap_err(),
            ValidationError::TitleEmpty
        );

        let mut task = Task::create_at(base_time(), "keep", None, None, None).unwrap();
        prop_assert_eq!(task.set_title(title), Err(ValidationError::TitleEmpty));
        prop_assert_eq!(task.title(), "keep");
    }

    #[test]
    fn due_before_creation_is_rejected(earlier_mins in 1i64..100_000, later_mins in 0i64..100_000) {
        let created = base_time();
        let mut task = Task::create_at(created, "deadline", None, None, None).unwrap();
        let valid = created + Duration::minutes(later_mins);
        task.set_due_at(Some(valid)).unwrap();

        let invalid = created - Duration::minutes(earlier_mins);
        let is_due_error = matches!(
            task.set_due_at(Some(invalid)),
            Err(ValidationError::DueBeforeCreation { .. })
        );
        prop_assert!(is_due_error);
        prop_assert_eq!(task.due_at(), Some(valid));
    }

    #[test]
    fn overdue_iff_clock_strictly_past_due(due_mins in 0i64..10_000, clock_mins in 0i64..10_000) {
        let created = base_time();
        let due = created + Duration::minutes(due_mins);
        let now = created + Duration::minutes(clock_mins);
        let task = Task::create_at(created, "timed", None, Some(due), None).unwrap();
        prop_assert_eq!(task.is_overdue_at(now), now > due);

        let open = Task::create_at(created, "open", None, None, None).unwrap();
        prop_assert!(!open.is_overdue_at(now));
    }

    #[test]
    fn identical_fields_never_share_identity(title in arb_title(), status in arb_status()) {
        let mut a = Task::create_at(base_time(), title.clone(), None, None, None).unwrap();
        let mut b = Task::create_at(base_time(), title, None, None, None).unwrap();
        a.set_status(status);
        b.set_status(status);
        prop_assert_ne!(a.id(), b.id());
        prop_assert_ne!(a, b);
    }

    #[test]
    fn status_and_priority_labels_parse_back(status in arb_status(), priority in arb_priority()) {
        prop_assert_eq!(status.to_string().to_uppercase().parse::<TaskStatus>(), Ok(status));
        prop_assert_eq!(priority.to_string().parse::<Priority>(), Ok(priority));
    }
}
