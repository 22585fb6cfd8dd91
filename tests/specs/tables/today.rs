//! "Today" query specs
//!
//! Verify the due-today and completed-today windows against a pinned clock.

use crate::prelude::*;
use taskdeck_tables::{tasks_completed_today, tasks_due_today, TaskRow};

fn names(rows: &[TaskRow]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

fn next_run(next: NaiveDateTime) -> FakeRuntime {
    FakeRuntime {
        next_run_time: Some(next),
        ..runtime()
    }
}

fn last_run(last: NaiveDateTime) -> FakeRuntime {
    FakeRuntime {
        last_run_time: Some(last),
        ..runtime()
    }
}

#[test]
fn due_today_runs_from_now_to_end_of_day() {
    let h = Harness::new();
    h.task("\\a-now", "C:\\a.exe", next_run(at(2024, 1, 1, 10, 0, 0)))
        .task(
            "\\b-last",
            "C:\\b.exe",
            next_run(at_micro(2024, 1, 1, 23, 59, 59, 999_999)),
        )
        .task("\\c-tomorrow", "C:\\c.exe", next_run(at(2024, 1, 2, 0, 0, 0)))
        .task("\\d-past", "C:\\d.exe", next_run(at(2024, 1, 1, 9, 59, 59)))
        .task("\\e-noon", "C:\\e.exe", next_run(at(2024, 1, 1, 12, 0, 0)));

    let rows = h.scheduler.get_all_tasks().unwrap();
    let due = tasks_due_today(&rows, h.scheduler.now());

    similar_asserts::assert_eq!(names(&due), vec!["a-now", "e-noon", "b-last"]);
}

#[test]
fn completed_today_starts_at_midnight() {
    let h = Harness::new();
    h.task("\\late", "C:\\a.exe", last_run(at(2024, 1, 1, 9, 0, 0)))
        .task("\\early", "C:\\b.exe", last_run(at(2024, 1, 1, 0, 0, 0)))
        .task(
            "\\yesterday",
            "C:\\c.exe",
            last_run(at_micro(2023, 12, 31, 23, 59, 59, 999_999)),
        )
        .task("\\future", "C:\\d.exe", last_run(at(2024, 1, 1, 11, 0, 0)));

    let rows = h.scheduler.get_all_tasks().unwrap();
    let done = tasks_completed_today(&rows, h.scheduler.now());

    similar_asserts::assert_eq!(names(&done), vec!["late", "early"]);
}

#[test]
fn moving_the_clock_moves_the_window() {
    let h = Harness::new();
    h.task("\\job", "C:\\job.exe", next_run(at(2024, 1, 2, 6, 0, 0)));
    let rows = h.scheduler.get_all_tasks().unwrap();

    assert!(tasks_due_today(&rows, h.scheduler.now()).is_empty());
    h.clock.set(at(2024, 1, 2, 5, 0, 0));
    assert_eq!(tasks_due_today(&rows, h.scheduler.now()).len(), 1);
}
