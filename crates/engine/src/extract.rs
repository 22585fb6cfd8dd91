// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flattening a registered task into a record

use crate::SchedulerError;
use taskdeck_core::{extract_exec_path, RegisteredTask, TaskRecord};

/// Flatten a registered task into a task record
///
/// The execution path comes from the task's XML, not the in-memory
/// definition, so it reflects what the provider actually stores.
pub fn extract(task: &RegisteredTask) -> Result<TaskRecord, SchedulerError> {
    let execution_path = extract_exec_path(&task.xml)?;
    let info = &task.definition.registration_info;

    Ok(TaskRecord {
        name: task.name.clone(),
        path: task.path.clone(),
        enabled: task.enabled,
        state: task.state,
        next_run_time: task.next_run_time,
        last_run_time: task.last_run_time,
        last_task_result: task.last_task_result,
        number_of_missed_runs: task.number_of_missed_runs,
        author: info.author.clone(),
        registration_date: info.date.clone(),
        description: info.description.clone(),
        source: info.source.clone(),
        settings: task.definition.settings.clone(),
        execution_path,
    })
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
