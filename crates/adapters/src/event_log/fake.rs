// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event log for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::EventLogSource;
use crate::provider::ProviderError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use taskdeck_core::EventLogEntry;

#[derive(Debug, Default)]
struct FakeLogState {
    logs: HashMap<String, Vec<EventLogEntry>>,
    reads: Vec<String>,
}

/// Fake event log keyed by log name
#[derive(Debug, Clone, Default)]
pub struct FakeEventLog {
    state: Arc<Mutex<FakeLogState>>,
}

impl FakeEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to a log
    pub fn push(&self, log_name: &str, entry: EventLogEntry) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .logs
            .entry(log_name.to_string())
            .or_default()
            .push(entry);
    }

    /// Log names read so far, in order
    pub fn reads(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .reads
            .clone()
    }
}

impl EventLogSource for FakeEventLog {
    fn read_events(&self, log_name: &str) -> Result<Vec<EventLogEntry>, ProviderError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.reads.push(log_name.to_string());
        state
            .logs
            .get(log_name)
            .cloned()
            .ok_or_else(|| ProviderError::Failed(format!("event log not found: {}", log_name)))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
