// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot records materialized from live provider state

use crate::definition::{TaskDefinition, TaskSettings};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeSet;

/// A registered task as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredTask {
    pub name: String,
    pub path: String,
    pub enabled: bool,
    pub state: i32,
    pub next_run_time: Option<NaiveDateTime>,
    pub last_run_time: Option<NaiveDateTime>,
    pub last_task_result: i32,
    pub number_of_missed_runs: u32,
    pub definition: TaskDefinition,
    /// Serialized XML of the full definition
    pub xml: String,
}

/// Flat attribute record for one task
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TaskRecord {
    pub name: String,
    pub path: String,
    pub enabled: bool,
    pub state: i32,
    pub next_run_time: Option<NaiveDateTime>,
    pub last_run_time: Option<NaiveDateTime>,
    pub last_task_result: i32,
    pub number_of_missed_runs: u32,
    pub author: String,
    pub registration_date: Option<String>,
    pub description: String,
    pub source: String,
    pub settings: TaskSettings,
    /// Command of the last exec action in the task XML, empty when none
    pub execution_path: String,
}

/// Folder contents at query time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderRecord {
    pub name: String,
    pub path: String,
    pub subfolders: BTreeSet<String>,
    pub tasks: BTreeSet<String>,
}

/// Raw entry read from the scheduler's event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLogEntry {
    pub time_generated: NaiveDateTime,
    /// Severity level of the record
    pub level: u8,
    pub event_id: u32,
    /// Event type (1 error, 2 warning, 4 information, ...)
    pub event_type: u16,
    /// Full path of the task the event refers to
    pub task_path: String,
}

/// One history row before normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    /// `%Y-%m-%d %H:%M:%S%.6f`
    pub event_created_time: String,
    pub event_level: i64,
    pub event_id: i64,
    pub task_name: String,
    pub event_id_description: String,
    pub event_log_description: String,
}
