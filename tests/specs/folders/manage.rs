//! Folder management specs
//!
//! Verify folder lookup, creation, deletion and task lookup by name.

use crate::prelude::*;

#[test]
fn folder_lookup_is_depth_first_by_name() {
    let h = Harness::new();
    h.folder("\\Apps\\Logs").folder("\\Logs");

    let folder = h.scheduler.get_folder(Some("Logs")).unwrap();
    assert_eq!(folder.path(), "\\Apps\\Logs");
}

#[test]
fn folder_info_lists_contents() {
    let h = Harness::new();
    h.folder("\\Ops\\Archive")
        .task("\\Ops\\Rotate", "C:\\rotate.exe", runtime());

    let info = h.scheduler.get_folder(Some("Ops")).unwrap().info().unwrap();
    assert_eq!(info.name, "Ops");
    assert!(info.subfolders.contains("Archive"));
    assert!(info.tasks.contains("Rotate"));
}

#[test]
fn create_then_delete_folder() {
    let h = Harness::new();
    let root = h.scheduler.get_folder(None).unwrap();

    let created = root.create_folder("Scratch").unwrap();
    assert_eq!(created.path(), "\\Scratch");
    assert!(h.scheduler.get_folder(Some("Scratch")).is_ok());

    root.delete_folder("Scratch").unwrap();
    assert!(matches!(
        h.scheduler.get_folder(Some("Scratch")),
        Err(SchedulerError::NotFound { .. })
    ));
}

#[test]
fn creating_an_existing_folder_fails() {
    let h = Harness::new();
    h.folder("\\Ops");

    let err = h
        .scheduler
        .get_folder(None)
        .unwrap()
        .create_folder("Ops")
        .unwrap_err();
    assert!(
        matches!(err, SchedulerError::AlreadyExists { kind: EntityKind::Folder, .. }),
        "{:?}",
        err
    );
}

#[test]
fn deleting_a_missing_folder_fails() {
    let h = Harness::new();
    let err = h
        .scheduler
        .get_folder(None)
        .unwrap()
        .delete_folder("Ghost")
        .unwrap_err();
    assert_eq!(err.to_string(), "folder not found: \\Ghost");
}

#[test]
fn task_lookup_by_name() {
    let h = Harness::new();
    h.task("\\Ops\\Rotate", "C:\\rotate.exe", runtime());
    let ops = h.scheduler.get_folder(Some("Ops")).unwrap();

    assert_eq!(ops.get_task("Rotate").unwrap().path, "\\Ops\\Rotate");
    assert!(matches!(
        ops.get_task("Missing"),
        Err(SchedulerError::NotFound { kind: EntityKind::Task, .. })
    ));
}
