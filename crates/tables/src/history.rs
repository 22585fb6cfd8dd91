// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History table: one row per scheduler event

use crate::TableError;
use chrono::NaiveDateTime;
use serde::Serialize;
use taskdeck_core::{leaf_name, HistoryRecord};

/// Text format of an event's creation time
pub const EVENT_CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Column names of the history table, in order
pub const HISTORY_COLUMNS: [&str; 6] = [
    "Event Created",
    "Event Level",
    "Event ID",
    "Task Name",
    "Event ID Description",
    "Event Log Description",
];

const INFORMATION: &str = "INFORMATION";
const WARNING: &str = "WARNING";
const ERROR: &str = "ERROR";

/// A normalized history row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    #[serde(rename = "Event Created")]
    pub event_created: NaiveDateTime,
    #[serde(rename = "Event Level")]
    pub event_level: i64,
    #[serde(rename = "Event ID")]
    pub event_id: i64,
    /// Last segment of the task path
    #[serde(rename = "Task Name")]
    pub task_name: String,
    #[serde(rename = "Event ID Description")]
    pub event_id_description: String,
    #[serde(rename = "Event Log Description")]
    pub event_log_description: String,
}

impl TryFrom<HistoryRecord> for HistoryRow {
    type Error = TableError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let event_created =
            NaiveDateTime::parse_from_str(&record.event_created_time, EVENT_CREATED_FORMAT)
                .map_err(|source| TableError::Timestamp {
                    value: record.event_created_time.clone(),
                    source,
                })?;
        Ok(Self {
            event_created,
            event_level: record.event_level,
            event_id: record.event_id,
            task_name: leaf_name(&record.task_name).to_string(),
            event_id_description: record.event_id_description,
            event_log_description: record.event_log_description,
        })
    }
}

/// Normalize history records; the first unparseable timestamp fails the batch
pub fn preprocess_history(records: Vec<HistoryRecord>) -> Result<Vec<HistoryRow>, TableError> {
    records.into_iter().map(HistoryRow::try_from).collect()
}

/// Events created on `now`'s date, most recent first
pub fn todays_history(rows: &[HistoryRow], now: NaiveDateTime) -> Vec<HistoryRow> {
    let today = now.date();
    let mut out: Vec<HistoryRow> = rows
        .iter()
        .filter(|r| r.event_created.date() == today)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.event_created.cmp(&a.event_created));
    out
}

fn count_by_log_description(rows: &[HistoryRow], description: &str) -> usize {
    rows.iter()
        .filter(|r| r.event_log_description == description)
        .count()
}

pub fn information_event_count(rows: &[HistoryRow]) -> usize {
    count_by_log_description(rows, INFORMATION)
}

pub fn warning_event_count(rows: &[HistoryRow]) -> usize {
    count_by_log_description(rows, WARNING)
}

pub fn error_event_count(rows: &[HistoryRow]) -> usize {
    count_by_log_description(rows, ERROR)
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
