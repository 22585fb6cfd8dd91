//! Test helpers for behavioral specifications.

#![allow(dead_code)]

pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use taskdeck_adapters::{FakeEventLog, FakeProvider, FakeRuntime, TASK_SCHEDULER_LOG};
pub use taskdeck_core::{
    ActionSpec, DaysOfMonth, DaysOfWeek, EventLogEntry, ExecAction, FakeClock, MonthsOfYear,
    TaskDefinition, TaskSettings, TaskState, TriggerSpec, WeeksOfMonth, TASK_NAMESPACE,
};
pub use taskdeck_engine::{EntityKind, NewTask, SchedulerConfig, SchedulerError, TaskScheduler};

/// A connected scheduler over a seeded fake provider, with a pinned clock
pub struct Harness {
    pub provider: FakeProvider,
    pub clock: FakeClock,
    pub scheduler: TaskScheduler<FakeProvider, FakeClock>,
}

impl Harness {
    /// Empty task tree; the clock reads 2024-01-01 10:00:00
    pub fn new() -> Self {
        let provider = FakeProvider::new();
        let clock = FakeClock::new(at(2024, 1, 1, 10, 0, 0));
        let scheduler =
            TaskScheduler::with_clock(provider.clone(), SchedulerConfig::default(), clock.clone());
        scheduler.connect().unwrap();
        Self {
            provider,
            clock,
            scheduler,
        }
    }

    /// Seed a task whose XML runs `command`
    pub fn task(&self, path: &str, command: &str, runtime: FakeRuntime) -> &Self {
        let (folder, name) = split(path);
        let mut definition = TaskDefinition::new();
        definition.push_action(ExecAction {
            path: command.to_string(),
            ..ExecAction::default()
        });
        self.provider.add_task(folder, name, definition, runtime);
        self
    }

    /// Seed a task with no actions
    pub fn bare_task(&self, path: &str, runtime: FakeRuntime) -> &Self {
        let (folder, name) = split(path);
        self.provider
            .add_task(folder, name, TaskDefinition::new(), runtime);
        self
    }

    pub fn folder(&self, path: &str) -> &Self {
        self.provider.add_folder(path);
        self
    }
}

/// Split `\A\B\task` into (`\A\B`, `task`)
fn split(path: &str) -> (&str, &str) {
    match path.rfind('\\') {
        Some(0) | None => ("\\", path.trim_start_matches('\\')),
        Some(i) => (&path[..i], &path[i + 1..]),
    }
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

pub fn at_micro(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, us: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_micro_opt(h, mi, s, us)
        .unwrap()
}

pub fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).unwrap()
}

pub fn time(h: u32, mi: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, mi, 0).unwrap()
}

pub fn runtime() -> FakeRuntime {
    FakeRuntime::default()
}
