// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task history collection from the scheduler event log

use crate::config::HistoryConfig;
use crate::SchedulerError;
use taskdeck_adapters::EventLogSource;
use taskdeck_core::codes::{event_id_description, event_log_description};
use taskdeck_core::{EventLogEntry, HistoryRecord};
use taskdeck_tables::EVENT_CREATED_FORMAT;

/// Describe one raw event log entry
pub fn history_record(entry: &EventLogEntry) -> HistoryRecord {
    HistoryRecord {
        event_created_time: entry.time_generated.format(EVENT_CREATED_FORMAT).to_string(),
        event_level: i64::from(entry.level),
        event_id: i64::from(entry.event_id),
        task_name: entry.task_path.clone(),
        event_id_description: event_id_description(entry.event_id),
        event_log_description: event_log_description(entry.event_type),
    }
}

/// Read the configured log and describe its entries, oldest first
///
/// With `max_events` set only the newest entries are kept.
pub fn collect_history<E: EventLogSource>(
    source: &E,
    config: &HistoryConfig,
) -> Result<Vec<HistoryRecord>, SchedulerError> {
    let entries = source.read_events(&config.log_name)?;
    let skip = match config.max_events {
        Some(max) => entries.len().saturating_sub(max),
        None => 0,
    };
    tracing::debug!(
        log_name = %config.log_name,
        read = entries.len(),
        kept = entries.len() - skip,
        "history collected"
    );
    Ok(entries.iter().skip(skip).map(history_record).collect())
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
