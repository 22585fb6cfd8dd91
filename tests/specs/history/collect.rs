//! History specs
//!
//! Verify event log collection and the derived history table.

use crate::prelude::*;
use taskdeck_tables::{
    error_event_count, information_event_count, todays_history, warning_event_count,
};

fn event(time: NaiveDateTime, event_id: u32, event_type: u16, task: &str) -> EventLogEntry {
    EventLogEntry {
        time_generated: time,
        level: 4,
        event_id,
        event_type,
        task_path: task.to_string(),
    }
}

fn seeded_log() -> FakeEventLog {
    let log = FakeEventLog::new();
    for entry in [
        event(at(2023, 12, 31, 22, 0, 0), 100, 4, "\\Ops\\Backup"),
        event(at(2024, 1, 1, 1, 0, 0), 100, 4, "\\Ops\\Backup"),
        event(at(2024, 1, 1, 1, 5, 0), 101, 1, "\\Ops\\Backup"),
        event(at(2024, 1, 1, 2, 0, 0), 322, 2, "\\Sync"),
        event(at(2024, 1, 1, 3, 0, 0), 102, 4, "\\Sync"),
    ] {
        log.push(TASK_SCHEDULER_LOG, entry);
    }
    log
}

#[test]
fn history_records_describe_events() {
    let h = Harness::new();
    let records = h.scheduler.history(&seeded_log()).unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[2].event_created_time, "2024-01-01 01:05:00.000000");
    assert_eq!(records[2].event_id_description, "Task Start Failed");
    assert_eq!(records[2].event_log_description, "ERROR");
    assert_eq!(records[2].task_name, "\\Ops\\Backup");
}

#[test]
fn todays_history_is_newest_first_with_leaf_names() {
    let h = Harness::new();
    let rows = h.scheduler.history_table(&seeded_log()).unwrap();

    let today = todays_history(&rows, h.scheduler.now());
    let summary: Vec<(i64, &str)> = today
        .iter()
        .map(|r| (r.event_id, r.task_name.as_str()))
        .collect();
    similar_asserts::assert_eq!(
        summary,
        vec![(102, "Sync"), (322, "Sync"), (101, "Backup"), (100, "Backup")]
    );
}

#[test]
fn events_are_counted_by_category() {
    let h = Harness::new();
    let rows = h.scheduler.history_table(&seeded_log()).unwrap();

    assert_eq!(information_event_count(&rows), 3);
    assert_eq!(warning_event_count(&rows), 1);
    assert_eq!(error_event_count(&rows), 1);
}
