// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! taskdeck-tables: tabular views over task and history snapshots
//!
//! Rows are plain structs whose serialized field names are the display
//! column names. Every query takes rows by slice and returns a new vector;
//! "today" is always relative to an injected `now`.

mod error;
mod history;
mod tasks;

pub use error::TableError;
pub use history::{
    error_event_count, information_event_count, preprocess_history, todays_history,
    warning_event_count, HistoryRow, EVENT_CREATED_FORMAT, HISTORY_COLUMNS,
};
pub use tasks::{
    count_by_state, missed_runs_total, preprocess_tasks, stats, task_count,
    tasks_completed_today, tasks_due_today, TaskRow, TaskStats, TASK_COLUMNS,
};

use serde::Serialize;

/// Serialize rows as a JSON array of objects keyed by column name
pub fn to_json<T: Serialize>(rows: &[T]) -> Result<String, TableError> {
    Ok(serde_json::to_string_pretty(rows)?)
}
