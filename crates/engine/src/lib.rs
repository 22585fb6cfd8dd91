// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! taskdeck-engine: Task Scheduler client façade
//!
//! Walks the folder tree through a [`SchedulerProvider`], flattens tasks into
//! records, and builds and registers new task definitions.
//!
//! [`SchedulerProvider`]: taskdeck_adapters::SchedulerProvider

pub mod builder;
pub mod config;
mod error;
pub mod extract;
mod folder;
pub mod history;
mod scheduler;
pub mod walker;

pub use config::{ConfigError, HistoryConfig, RegistrationConfig, SchedulerConfig};
pub use error::{EntityKind, SchedulerError};
pub use folder::TaskFolder;
pub use scheduler::{NewTask, TaskScheduler};
