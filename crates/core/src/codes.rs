// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed code tables of the Task Scheduler object model
//!
//! Lookups that turn a numeric code into a label never fail: a code with no
//! entry degrades to its own decimal text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a textual kind tag (trigger or action type)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: {value}")]
pub struct ParseKindError {
    pub what: &'static str,
    pub value: String,
}

/// Live state of a registered task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    Unknown = 0,
    Disabled = 1,
    Queued = 2,
    Ready = 3,
    Running = 4,
}

impl TaskState {
    pub const ALL: [TaskState; 5] = [
        TaskState::Unknown,
        TaskState::Disabled,
        TaskState::Queued,
        TaskState::Ready,
        TaskState::Running,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskState::Unknown => "Unknown",
            TaskState::Disabled => "Disabled",
            TaskState::Queued => "Queued",
            TaskState::Ready => "Ready",
            TaskState::Running => "Running",
        }
    }
}

/// Human-readable label for a task state code
pub fn state_definition(code: i32) -> String {
    TaskState::from_code(code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Known last-run result codes, keyed by their unsigned bit pattern.
const TASK_RESULTS: &[(u32, &str)] = &[
    (0x0, "The operation completed successfully."),
    (0x1, "Incorrect function called or unknown function called."),
    (0x2, "File not found."),
    (0xA, "The environment is incorrect."),
    (0x41300, "Task is ready to run at its next scheduled time."),
    (0x41301, "Task is currently running."),
    (0x41302, "Task is disabled."),
    (0x41303, "Task has not yet run."),
    (0x41304, "There are no more runs scheduled for this task."),
    (0x41306, "Task is terminated."),
    (0x8004130F, "Credentials became corrupted."),
    (0x8004131F, "An instance of this task is already running."),
    (
        0x800704DD,
        "The service is not available (is 'Run only when a user is logged on' checked?).",
    ),
    (0xC000013A, "The application terminated as a result of a CTRL+C."),
    (0xC06D007E, "Unknown software exception."),
];

/// Human-readable description of a last-run result code
///
/// The provider reports results as signed 32-bit values, so HRESULT-style
/// codes arrive negative; they are matched on their bit pattern.
pub fn result_definition(code: i32) -> String {
    let bits = code as u32;
    TASK_RESULTS
        .iter()
        .find(|(k, _)| *k == bits)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Operational log event ids written by the Task Scheduler service
const EVENT_IDS: &[(u32, &str)] = &[
    (100, "Task Started"),
    (101, "Task Start Failed"),
    (102, "Task Completed"),
    (103, "Action Start Failed"),
    (106, "Task Registered"),
    (107, "Task Triggered On Scheduler"),
    (108, "Task Triggered On Event"),
    (110, "Task Triggered By User"),
    (111, "Task Terminated"),
    (118, "Task Triggered By Computer Startup"),
    (119, "Task Triggered On Logon"),
    (129, "Created Task Process"),
    (140, "Task Registration Updated"),
    (141, "Task Registration Deleted"),
    (142, "Task Disabled"),
    (200, "Action Started"),
    (201, "Action Completed"),
    (202, "Action Failed"),
    (203, "Action Failed To Start"),
    (322, "Launch Request Ignored, Instance Already Running"),
    (325, "Launch Request Queued"),
    (329, "Task Stopping Due To Timeout"),
    (330, "Task Stopping Due To User Request"),
    (332, "Launch Condition Not Met, User Not Logged-On"),
];

/// Description of a scheduler event id
pub fn event_id_description(event_id: u32) -> String {
    EVENT_IDS
        .iter()
        .find(|(k, _)| *k == event_id)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| event_id.to_string())
}

/// Event log category label (`INFORMATION`, `WARNING`, `ERROR`, ...)
pub fn event_log_description(event_type: u16) -> String {
    match event_type {
        0 => "SUCCESS".to_string(),
        1 => "ERROR".to_string(),
        2 => "WARNING".to_string(),
        4 => "INFORMATION".to_string(),
        8 => "AUDIT_SUCCESS".to_string(),
        16 => "AUDIT_FAILURE".to_string(),
        other => other.to_string(),
    }
}

/// Registration semantics passed to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCreation {
    Validate = 1,
    Create = 2,
    Update = 4,
    #[default]
    CreateOrUpdate = 6,
    Disable = 8,
}

impl TaskCreation {
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether a new task may be created under this flag
    pub fn allows_create(self) -> bool {
        self.code() & TaskCreation::Create.code() != 0
    }

    /// Whether an existing task may be replaced under this flag
    pub fn allows_update(self) -> bool {
        self.code() & TaskCreation::Update.code() != 0
    }
}

/// Security logon method used when registering a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogonType {
    #[default]
    None = 0,
    Password = 1,
    S4u = 2,
    InteractiveToken = 3,
    Group = 4,
    ServiceAccount = 5,
    InteractiveTokenOrPassword = 6,
}

impl LogonType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// How the scheduler handles a launch while an instance is already running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InstancePolicy {
    Parallel = 0,
    Queue = 1,
    #[default]
    IgnoreNew = 2,
    StopExisting = 3,
}

impl InstancePolicy {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(InstancePolicy::Parallel),
            1 => Some(InstancePolicy::Queue),
            2 => Some(InstancePolicy::IgnoreNew),
            3 => Some(InstancePolicy::StopExisting),
            _ => None,
        }
    }

    /// Element text used in task XML
    pub fn xml_name(self) -> &'static str {
        match self {
            InstancePolicy::Parallel => "Parallel",
            InstancePolicy::Queue => "Queue",
            InstancePolicy::IgnoreNew => "IgnoreNew",
            InstancePolicy::StopExisting => "StopExisting",
        }
    }
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod tests;
