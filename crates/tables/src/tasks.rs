// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task table: one row per registered task

use chrono::{Duration, NaiveDateTime, NaiveTime, SubsecRound, Timelike};
use serde::Serialize;
use taskdeck_core::codes::{result_definition, state_definition};
use taskdeck_core::{top_folder_name, TaskRecord, TaskState};

/// Column names of the task table, in order
pub const TASK_COLUMNS: [&str; 24] = [
    "task_source",
    "task_path",
    "task_folder_name",
    "name",
    "task_description",
    "enabled",
    "task_state",
    "task_state_definition",
    "next_run_time",
    "last_run_time",
    "last_task_result",
    "last_task_result_definition",
    "number_of_missed_runs",
    "author",
    "registration_date",
    "execution_path",
    "AllowDemandStart",
    "StartWhenAvailable",
    "Enabled",
    "Hidden",
    "RestartInterval",
    "RestartCount",
    "ExecutionTimeLimit",
    "MultipleInstances",
];

/// A normalized task row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub task_source: String,
    pub task_path: String,
    pub task_folder_name: String,
    pub name: String,
    pub task_description: String,
    pub enabled: bool,
    pub task_state: i32,
    pub task_state_definition: String,
    pub next_run_time: Option<NaiveDateTime>,
    pub last_run_time: Option<NaiveDateTime>,
    pub last_task_result: i32,
    pub last_task_result_definition: String,
    pub number_of_missed_runs: u32,
    pub author: String,
    pub registration_date: Option<String>,
    pub execution_path: String,
    #[serde(rename = "AllowDemandStart")]
    pub allow_demand_start: bool,
    #[serde(rename = "StartWhenAvailable")]
    pub start_when_available: bool,
    /// Enabled flag of the definition settings (as opposed to the live flag)
    #[serde(rename = "Enabled")]
    pub settings_enabled: bool,
    #[serde(rename = "Hidden")]
    pub hidden: bool,
    #[serde(rename = "RestartInterval")]
    pub restart_interval: String,
    #[serde(rename = "RestartCount")]
    pub restart_count: u32,
    #[serde(rename = "ExecutionTimeLimit")]
    pub execution_time_limit: String,
    #[serde(rename = "MultipleInstances")]
    pub multiple_instances: i32,
}

impl From<TaskRecord> for TaskRow {
    fn from(record: TaskRecord) -> Self {
        Self {
            task_folder_name: top_folder_name(&record.path),
            task_state_definition: state_definition(record.state),
            last_task_result_definition: result_definition(record.last_task_result),
            task_source: record.source,
            task_path: record.path,
            name: record.name,
            task_description: record.description,
            enabled: record.enabled,
            task_state: record.state,
            next_run_time: record.next_run_time,
            last_run_time: record.last_run_time,
            last_task_result: record.last_task_result,
            number_of_missed_runs: record.number_of_missed_runs,
            author: record.author,
            registration_date: record.registration_date,
            execution_path: record.execution_path,
            allow_demand_start: record.settings.allow_demand_start,
            start_when_available: record.settings.start_when_available,
            settings_enabled: record.settings.enabled,
            hidden: record.settings.hidden,
            restart_interval: record.settings.restart_interval,
            restart_count: record.settings.restart_count,
            execution_time_limit: record.settings.execution_time_limit,
            multiple_instances: record.settings.multiple_instances.code(),
        }
    }
}

/// Normalize extracted task records into table rows, keeping their order
pub fn preprocess_tasks(records: Vec<TaskRecord>) -> Vec<TaskRow> {
    records.into_iter().map(TaskRow::from).collect()
}

/// Tasks whose last run falls in `[midnight today, now)`, most recent first
pub fn tasks_completed_today(rows: &[TaskRow], now: NaiveDateTime) -> Vec<TaskRow> {
    let midnight = now.date().and_time(NaiveTime::MIN);
    let mut out: Vec<TaskRow> = rows
        .iter()
        .filter(|r| {
            r.last_run_time
                .is_some_and(|t| t >= midnight && t < now)
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| b.last_run_time.cmp(&a.last_run_time));
    out
}

/// Tasks whose next run falls between now and the last microsecond of today,
/// soonest first
pub fn tasks_due_today(rows: &[TaskRow], now: NaiveDateTime) -> Vec<TaskRow> {
    let (lower, upper) = due_today_window(now);
    let mut out: Vec<TaskRow> = rows
        .iter()
        .filter(|r| r.next_run_time.is_some_and(|t| t >= lower && t <= upper))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.next_run_time.cmp(&b.next_run_time));
    out
}

/// Inclusive bounds for "due today"
///
/// The upper bound adds the remaining hours, minutes, seconds and
/// microseconds of the day to `now` truncated to microseconds.
pub(crate) fn due_today_window(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let lower = now.trunc_subsecs(6);
    let micros = i64::from(lower.nanosecond() / 1_000);
    let remaining = Duration::hours(23 - i64::from(lower.hour()))
        + Duration::minutes(59 - i64::from(lower.minute()))
        + Duration::seconds(59 - i64::from(lower.second()))
        + Duration::microseconds(999_999 - micros);
    (lower, lower + remaining)
}

/// Total number of tasks, disabled ones included
pub fn task_count(rows: &[TaskRow]) -> usize {
    rows.len()
}

/// Sum of missed runs over all tasks
pub fn missed_runs_total(rows: &[TaskRow]) -> u64 {
    rows.iter().map(|r| u64::from(r.number_of_missed_runs)).sum()
}

/// Number of tasks in a state
pub fn count_by_state(rows: &[TaskRow], state: TaskState) -> usize {
    rows.iter().filter(|r| r.task_state == state.code()).count()
}

/// Summary counts over the task table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub task_total: usize,
    pub missed_runs_total: u64,
    pub unknown_state_total: usize,
    pub disabled_state_total: usize,
    pub queued_state_total: usize,
    pub ready_state_total: usize,
    pub running_state_total: usize,
}

pub fn stats(rows: &[TaskRow]) -> TaskStats {
    TaskStats {
        task_total: task_count(rows),
        missed_runs_total: missed_runs_total(rows),
        unknown_state_total: count_by_state(rows, TaskState::Unknown),
        disabled_state_total: count_by_state(rows, TaskState::Disabled),
        queued_state_total: count_by_state(rows, TaskState::Queued),
        ready_state_total: count_by_state(rows, TaskState::Ready),
        running_state_total: count_by_state(rows, TaskState::Running),
    }
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
