//! Task statistics specs

use crate::prelude::*;
use taskdeck_tables::{count_by_state, stats, to_json, TaskStats};

#[test]
fn stats_summarize_the_task_table() {
    let h = Harness::new();
    let with = |state: TaskState, missed: u32| FakeRuntime {
        state: state.code(),
        number_of_missed_runs: missed,
        ..runtime()
    };
    h.task("\\a", "C:\\a.exe", with(TaskState::Ready, 2))
        .task("\\b", "C:\\b.exe", with(TaskState::Ready, 0))
        .task("\\Ops\\c", "C:\\c.exe", with(TaskState::Running, 1))
        .task("\\Ops\\d", "C:\\d.exe", with(TaskState::Disabled, 0))
        .task("\\Ops\\Deep\\e", "C:\\e.exe", with(TaskState::Queued, 3));

    let rows = h.scheduler.get_all_tasks().unwrap();

    similar_asserts::assert_eq!(
        stats(&rows),
        TaskStats {
            task_total: 5,
            missed_runs_total: 6,
            unknown_state_total: 0,
            disabled_state_total: 1,
            queued_state_total: 1,
            ready_state_total: 2,
            running_state_total: 1,
        }
    );
    assert_eq!(count_by_state(&rows, TaskState::Ready), 2);
}

#[test]
fn task_table_exports_as_json() {
    let h = Harness::new();
    h.task("\\Ops\\Backup", "C:\\backup.exe", runtime());

    let rows = h.scheduler.get_all_tasks().unwrap();
    let json = to_json(&rows).unwrap();

    assert!(json.contains("\"task_folder_name\": \"Ops\""), "{}", json);
    assert!(json.contains("\"MultipleInstances\": 2"), "{}", json);
    assert!(json.contains("\"execution_path\": \"C:\\\\backup.exe\""), "{}", json);
}
