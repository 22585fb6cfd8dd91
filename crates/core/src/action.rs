// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action specs

use crate::codes::ParseKindError;
use std::fmt;
use std::str::FromStr;

/// Action type codes of the scheduler object model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Exec = 0,
    ComHandler = 5,
    SendEmail = 6,
    ShowMessage = 7,
}

impl ActionType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Textual action tag as accepted from callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Exec,
    ComHandler,
    Email,
    ShowMessage,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Exec => "exec",
            ActionKind::ComHandler => "com-handler",
            ActionKind::Email => "email",
            ActionKind::ShowMessage => "show-message",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exec" => Ok(ActionKind::Exec),
            "com-handler" => Ok(ActionKind::ComHandler),
            "email" => Ok(ActionKind::Email),
            "show-message" => Ok(ActionKind::ShowMessage),
            other => Err(ParseKindError {
                what: "action type",
                value: other.to_string(),
            }),
        }
    }
}

/// Command-line action attached to a definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecAction {
    pub path: String,
    pub arguments: String,
    pub working_directory: String,
}

/// An action to attach to a new task definition
///
/// Only `Exec` can be built; the other kinds exist so callers get an explicit
/// "not implemented" failure instead of a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSpec {
    Exec(ExecAction),
    ComHandler,
    SendEmail,
    ShowMessage,
}

impl ActionSpec {
    pub fn exec(
        path: impl Into<String>,
        arguments: Option<&str>,
        working_directory: Option<&str>,
    ) -> Self {
        ActionSpec::Exec(ExecAction {
            path: path.into(),
            arguments: arguments.unwrap_or_default().to_string(),
            working_directory: working_directory.unwrap_or_default().to_string(),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            ActionSpec::Exec(_) => ActionKind::Exec,
            ActionSpec::ComHandler => ActionKind::ComHandler,
            ActionSpec::SendEmail => ActionKind::Email,
            ActionSpec::ShowMessage => ActionKind::ShowMessage,
        }
    }

    pub fn action_type(&self) -> ActionType {
        match self {
            ActionSpec::Exec(_) => ActionType::Exec,
            ActionSpec::ComHandler => ActionType::ComHandler,
            ActionSpec::SendEmail => ActionType::SendEmail,
            ActionSpec::ShowMessage => ActionType::ShowMessage,
        }
    }
}
