//! Task enumeration specs
//!
//! Verify the depth-first walk and the flattened task records.

use crate::prelude::*;

#[test]
fn walk_lists_folder_tasks_before_subfolders() {
    let h = Harness::new();
    h.folder("\\Microsoft\\Windows")
        .task("\\Cleanup", "C:\\cleanup.exe", runtime())
        .task("\\Microsoft\\Windows\\Defrag", "C:\\defrag.exe", runtime())
        .task("\\Microsoft\\Update", "C:\\update.exe", runtime())
        .task("\\Zip", "C:\\zip.exe", runtime());

    let paths: Vec<String> = h
        .scheduler
        .enumerate_all_tasks()
        .unwrap()
        .into_iter()
        .map(|r| r.path)
        .collect();

    similar_asserts::assert_eq!(
        paths,
        vec![
            "\\Cleanup".to_string(),
            "\\Zip".to_string(),
            "\\Microsoft\\Update".to_string(),
            "\\Microsoft\\Windows\\Defrag".to_string(),
        ]
    );
}

#[test]
fn records_carry_execution_path_from_xml() {
    let h = Harness::new();
    h.task("\\Backup", "C:\\tools\\backup.exe", runtime())
        .bare_task("\\Idle", runtime());

    let records = h.scheduler.enumerate_all_tasks().unwrap();
    assert_eq!(records[0].execution_path, "C:\\tools\\backup.exe");
    assert_eq!(records[1].execution_path, "");
}

#[test]
fn two_exec_actions_yield_the_last_command() {
    let h = Harness::new();
    h.bare_task("\\Chain", runtime());
    h.provider.set_task_xml(
        "\\",
        "Chain",
        format!(
            r#"<?xml version="1.0" encoding="UTF-16"?>
<Task version="1.2" xmlns="{TASK_NAMESPACE}">
  <Actions Context="Author">
    <Exec><Command>C:\first.exe</Command></Exec>
    <Exec><Command>C:\second.exe</Command></Exec>
  </Actions>
</Task>"#
        ),
    );

    let records = h.scheduler.enumerate_all_tasks().unwrap();
    assert_eq!(records[0].execution_path, "C:\\second.exe");
}

#[test]
fn malformed_xml_aborts_the_walk() {
    let h = Harness::new();
    h.task("\\Good", "C:\\good.exe", runtime())
        .bare_task("\\Bad", runtime());
    h.provider.set_task_xml("\\", "Bad", "<Task><Actions></Task>");

    let err = h.scheduler.enumerate_all_tasks().unwrap_err();
    assert!(matches!(err, SchedulerError::Definition(_)), "{:?}", err);
}

#[test]
fn task_table_derives_top_level_folder() {
    let h = Harness::new();
    h.task("\\Root", "C:\\a.exe", runtime())
        .task("\\A\\B\\C", "C:\\c.exe", runtime());

    let rows = h.scheduler.get_all_tasks().unwrap();
    let folders: Vec<&str> = rows.iter().map(|r| r.task_folder_name.as_str()).collect();
    assert_eq!(folders, vec!["\\", "A"]);
}

#[test]
fn unmapped_state_code_is_shown_as_number() {
    let h = Harness::new();
    h.task(
        "\\Odd",
        "C:\\odd.exe",
        FakeRuntime {
            state: 17,
            last_task_result: -5,
            ..runtime()
        },
    );

    let rows = h.scheduler.get_all_tasks().unwrap();
    assert_eq!(rows[0].task_state_definition, "17");
    assert_eq!(rows[0].last_task_result_definition, "-5");
}
