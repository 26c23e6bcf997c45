//! Integration tests for task creation, filtering and removal through
//! `TaskManager`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use tasktrack::tasks::TaskManager;
use tasktrack_core::{Priority, Task, TaskId, TaskStatus, ValidationError};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Creates a task with the given title, priority and status.
fn make_task(title: &str, priority: Priority, status: TaskStatus) -> Task {
    let mut task = Task::create(title, None, None, Some(priority)).expect("valid task");
    task.set_status(status);
    task
}

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}

// ===========================================================================
// End-to-end scenario
// ===========================================================================

#[test]
fn priority_and_status_filters_then_remove() {
    let mut mgr = TaskManager::new();
    let a = make_task("A", Priority::High, TaskStatus::Pending);
    let b = make_task("B", Priority::Low, TaskStatus::Completed);
    let (a_id, b_id) = (a.id(), b.id());
    mgr.add(a);
    mgr.add(b);

    assert_eq!(ids(&mgr.list_by_priority(Priority::High)), [a_id]);
    assert_eq!(ids(&mgr.list_by_status(TaskStatus::Completed)), [b_id]);

    assert!(mgr.remove(&a_id));
    assert!(mgr.find_by_id(&a_id).is_none());
    assert_eq!(ids(&mgr.list_all()), [b_id]);
}

#[test]
fn add_then_remove_leaves_nothing_to_find() {
    let mut mgr = TaskManager::new();
    let task = make_task("Short lived", Priority::Medium, TaskStatus::InProgress);
    let id = task.id();
    mgr.add(task);
    assert!(mgr.find_by_id(&id).is_some());
    mgr.remove(&id);
    assert!(mgr.find_by_id(&id).is_none());
}

#[test]
fn removing_unknown_id_keeps_size() {
    let mut mgr = TaskManager::new();
    mgr.add(make_task("One", Priority::Low, TaskStatus::Pending));
    mgr.add(make_task("Two", Priority::Low, TaskStatus::Pending));
    assert!(!mgr.remove(&TaskId::new()));
    assert_eq!(mgr.len(), 2);
}

#[test]
fn validation_errors_surface_to_caller() {
    assert_eq!(
        Task::create("", None, None, None).unwrap_err(),
        ValidationError::TitleEmpty
    );
    assert_eq!(
        Task::create("   ", None, None, None).unwrap_err(),
        ValidationError::TitleEmpty
    );
}

#[test]
fn failed_update_through_manager_keeps_task_intact() {
    let mut mgr = TaskManager::new();
    let task = Task::create("Plan", None, None, None).expect("valid task");
    let id = task.id();
    let created = task.created_at();
    mgr.add(task);

    let stored = mgr.find_by_id_mut(&id).expect("stored task");
    let err = stored
        .set_due_at(Some(created - chrono::Duration::days(1)))
        .unwrap_err();
    assert!(matches!(err, ValidationError::DueBeforeCreation { .. }));
    assert!(stored.set_title("").is_err());

    let found = mgr.find_by_id(&id).expect("stored task");
    assert_eq!(found.title(), "Plan");
    assert!(found.due_at().is_none());
}

#[test]
fn snapshots_do_not_alias_manager_storage() {
    let mut mgr = TaskManager::new();
    mgr.add(make_task("Original", Priority::High, TaskStatus::Pending));

    let mut by_priority = mgr.list_by_priority(Priority::High);
    by_priority[0].set_priority(Priority::Low);
    let mut by_status = mgr.list_by_status(TaskStatus::Pending);
    by_status[0].set_status(TaskStatus::Cancelled);
    by_status.push(make_task("Extra", Priority::Low, TaskStatus::Pending));

    assert_eq!(mgr.len(), 1);
    assert_eq!(mgr.list_by_priority(Priority::High).len(), 1);
    assert_eq!(mgr.list_by_status(TaskStatus::Pending).len(), 1);
}

// ===========================================================================
// Property tests
// ===========================================================================

fn arb_entries() -> impl Strategy<Value = Vec<(Priority, TaskStatus)>> {
    prop::collection::vec(
        (
            prop::sample::select(Priority::ALL.to_vec()),
            prop::sample::select(TaskStatus::ALL.to_vec()),
        ),
        0..40,
    )
}

fn build_manager(entries: &[(Priority, TaskStatus)]) -> TaskManager {
    let mut mgr = TaskManager::new();
    for (i, (priority, status)) in entries.iter().enumerate() {
        mgr.add(make_task(&format!("task-{i}"), *priority, *status));
    }
    mgr
}

proptest! {
    #[test]
    fn list_by_status_is_ordered_subset_of_list_all(entries in arb_entries()) {
        let mgr = build_manager(&entries);
        for status in TaskStatus::ALL {
            let expected: Vec<TaskId> = mgr
                .list_all()
                .iter()
                .filter(|t| t.status() == status)
                .map(Task::id)
                .collect();
            prop_assert_eq!(ids(&mgr.list_by_status(status)), expected);
        }
    }

    #[test]
    fn list_by_priority_is_ordered_subset_of_list_all(entries in arb_entries()) {
        let mgr = build_manager(&entries);
        for priority in Priority::ALL {
            let expected: Vec<TaskId> = mgr
                .list_all()
                .iter()
                .filter(|t| t.priority() == priority)
                .map(Task::id)
                .collect();
            prop_assert_eq!(ids(&mgr.list_by_priority(priority)), expected);
        }
    }

    #[test]
    fn status_partitions_cover_every_task(entries in arb_entries()) {
        let mgr = build_manager(&entries);
        let total: usize = TaskStatus::ALL
            .into_iter()
            .map(|s| mgr.list_by_status(s).len())
            .sum();
        prop_assert_eq!(total, mgr.len());
    }

    #[test]
    fn remove_drops_exactly_one_task(entries in arb_entries(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let mut mgr = build_manager(&entries);
        let all = mgr.list_all();
        let victim = all[pick.index(all.len())].id();

        prop_assert!(mgr.remove(&victim));
        prop_assert_eq!(mgr.len(), entries.len() - 1);
        prop_assert!(mgr.find_by_id(&victim).is_none());
        let remaining: Vec<TaskId> = all.iter().map(Task::id).filter(|id| *id != victim).collect();
        prop_assert_eq!(ids(&mgr.list_all()), remaining);
    }
}
