// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler event log capability

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeEventLog;

use crate::provider::ProviderError;
use taskdeck_core::EventLogEntry;

/// Name of the log the Task Scheduler service writes its operational events to
pub const TASK_SCHEDULER_LOG: &str = "Microsoft-Windows-TaskScheduler/Operational";

/// Adapter for reading event log records
pub trait EventLogSource: Clone {
    /// All records of a log, oldest first
    fn read_events(&self, log_name: &str) -> Result<Vec<EventLogEntry>, ProviderError>;
}
