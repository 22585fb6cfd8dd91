// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the OS task scheduling service

pub mod event_log;
pub mod provider;
pub mod traced;

pub use event_log::{EventLogSource, TASK_SCHEDULER_LOG};
pub use provider::{ProviderError, Registration, SchedulerProvider};
pub use traced::{TracedEventLog, TracedProvider};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use event_log::FakeEventLog;
#[cfg(any(test, feature = "test-support"))]
pub use provider::{FakeProvider, FakeRuntime, ProviderCall};
