//! Task creation specs
//!
//! Verify trigger and action building and create-or-update registration.

use crate::prelude::*;

fn exec() -> ActionSpec {
    ActionSpec::exec("C:\\tools\\report.exe", None, Some("C:\\reports"))
}

#[test]
fn created_task_appears_in_the_walk() {
    let h = Harness::new();
    h.folder("\\Reports");

    h.scheduler
        .create_task(
            NewTask::new(
                "Weekly",
                TriggerSpec::weekly(date(2024, 1, 5), time(7, 30), 1, DaysOfWeek::FRIDAY),
                exec(),
            )
            .in_folder("Reports")
            .description("weekly report"),
        )
        .unwrap();

    let records = h.scheduler.enumerate_all_tasks().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "\\Reports\\Weekly");
    assert_eq!(records[0].description, "weekly report");
    assert_eq!(records[0].execution_path, "C:\\tools\\report.exe");
    assert_eq!(records[0].next_run_time, Some(at(2024, 1, 5, 7, 30, 0)));
}

#[test]
fn every_cadence_can_be_created() {
    let h = Harness::new();
    let start = date(2024, 1, 1);
    let cases = [
        (TriggerSpec::daily(start, time(1, 0), 3), 2),
        (
            TriggerSpec::weekly(
                start,
                time(1, 0),
                2,
                DaysOfWeek::MONDAY | DaysOfWeek::WEDNESDAY,
            ),
            3,
        ),
        (
            TriggerSpec::monthly(
                start,
                time(1, 0),
                DaysOfMonth::day(15).unwrap() | DaysOfMonth::LAST,
                MonthsOfYear::ALL,
            ),
            4,
        ),
        (
            TriggerSpec::monthly_day_of_week(
                start,
                time(1, 0),
                DaysOfWeek::SATURDAY,
                MonthsOfYear::JUNE | MonthsOfYear::DECEMBER,
                WeeksOfMonth::SECOND | WeeksOfMonth::LAST,
            ),
            5,
        ),
        (TriggerSpec::one_time(start, time(1, 0)), 1),
    ];

    for (i, (trigger, code)) in cases.into_iter().enumerate() {
        let kind = trigger.kind();
        let definition = h
            .scheduler
            .create_task(NewTask::new(format!("task-{}", i), trigger, exec()))
            .unwrap();
        assert_eq!(
            definition.triggers[0].trigger_type.code(),
            code,
            "trigger type for {}",
            kind
        );
        assert_eq!(definition.triggers[0].start_boundary, "2024-01-01T01:00:00");
    }
    assert_eq!(h.scheduler.enumerate_all_tasks().unwrap().len(), 5);
}

#[test]
fn monthly_day_of_week_with_email_is_unimplemented() {
    let h = Harness::new();

    let err = h
        .scheduler
        .create_task(NewTask::new(
            "Mail",
            TriggerSpec::monthly_day_of_week(
                date(2024, 1, 1),
                time(9, 0),
                DaysOfWeek::MONDAY,
                MonthsOfYear::ALL,
                WeeksOfMonth::FIRST,
            ),
            ActionSpec::SendEmail,
        ))
        .unwrap_err();

    assert!(matches!(err, SchedulerError::Unimplemented(_)), "{:?}", err);
    assert!(h.scheduler.enumerate_all_tasks().unwrap().is_empty());
}

#[test]
fn registering_an_existing_name_overwrites_it() {
    let h = Harness::new();
    let task = |description: &str| {
        NewTask::new(
            "Nightly",
            TriggerSpec::daily(date(2024, 1, 1), time(2, 0), 1),
            exec(),
        )
        .description(description)
    };

    h.scheduler.create_task(task("first")).unwrap();
    h.scheduler.create_task(task("second")).unwrap();

    let records = h.scheduler.enumerate_all_tasks().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "second");
}

#[test]
fn creating_in_a_missing_folder_is_not_found() {
    let h = Harness::new();
    let err = h
        .scheduler
        .create_task(
            NewTask::new(
                "Lost",
                TriggerSpec::one_time(date(2024, 1, 1), time(0, 0)),
                exec(),
            )
            .in_folder("Nowhere"),
        )
        .unwrap_err();

    match err {
        SchedulerError::NotFound { kind, name } => {
            assert_eq!(kind, EntityKind::Folder);
            assert_eq!(name, "Nowhere");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}
