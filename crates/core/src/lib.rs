// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! taskdeck-core: data model for the Task Scheduler client layer
//!
//! This crate provides:
//! - Task definitions with trigger and action specs
//! - Flat task, folder and history records
//! - Fixed code tables (task states, results, event ids)
//! - Task XML serialization and exec-path extraction
//! - A clock abstraction for "today" queries

pub mod action;
pub mod clock;
pub mod codes;
pub mod definition;
pub mod path;
pub mod record;
pub mod trigger;
pub mod xml;

pub use action::{ActionKind, ActionSpec, ActionType, ExecAction};
pub use clock::{Clock, FakeClock, SystemClock};
pub use codes::{InstancePolicy, LogonType, ParseKindError, TaskCreation, TaskState};
pub use definition::{RegistrationInfo, TaskDefinition, TaskSettings, Trigger};
pub use path::{join_folder_path, leaf_name, top_folder_name, ROOT_FOLDER, SEPARATOR};
pub use record::{EventLogEntry, FolderRecord, HistoryRecord, RegisteredTask, TaskRecord};
pub use trigger::{
    Cadence, DaysOfMonth, DaysOfWeek, MonthsOfYear, TriggerKind, TriggerSpec, TriggerType,
    WeeksOfMonth,
};
pub use xml::{extract_exec_path, XmlError, TASK_NAMESPACE};
