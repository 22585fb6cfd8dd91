//! Task mutation specs
//!
//! Verify settings and registration-info updates on registered tasks.

use crate::prelude::*;

fn seeded() -> Harness {
    let h = Harness::new();
    h.folder("\\Ops");
    h.scheduler
        .create_task(
            NewTask::new(
                "Sync",
                TriggerSpec::daily(date(2024, 1, 1), time(4, 0), 1),
                ActionSpec::exec("C:\\sync.exe", None, None),
            )
            .in_folder("Ops")
            .description("sync shares"),
        )
        .unwrap();
    h
}

#[test]
fn settings_update_shows_up_in_the_task_table() {
    let h = seeded();
    let settings = TaskSettings {
        allow_demand_start: false,
        enabled: false,
        restart_interval: "PT15M".to_string(),
        restart_count: 4,
        ..TaskSettings::default()
    };

    h.scheduler
        .update_task_settings(Some("Ops"), "Sync", settings)
        .unwrap();

    let rows = h.scheduler.get_all_tasks().unwrap();
    assert!(!rows[0].allow_demand_start);
    assert!(!rows[0].settings_enabled);
    assert!(!rows[0].enabled);
    assert_eq!(rows[0].restart_interval, "PT15M");
    assert_eq!(rows[0].restart_count, 4);
    assert_eq!(rows[0].execution_path, "C:\\sync.exe");
}

#[test]
fn description_update_keeps_everything_else() {
    let h = seeded();

    h.scheduler
        .update_registration_info(Some("Ops"), "Sync", "sync shares hourly")
        .unwrap();

    let records = h.scheduler.enumerate_all_tasks().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "sync shares hourly");
    assert_eq!(records[0].settings, TaskSettings::default());
}

#[test]
fn updating_a_missing_task_is_not_found() {
    let h = seeded();
    let err = h
        .scheduler
        .update_task_settings(Some("Ops"), "Nope", TaskSettings::default())
        .unwrap_err();

    assert_eq!(err.to_string(), "task not found: \\Ops\\Nope");
}
