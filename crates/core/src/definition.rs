// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task definitions: what gets registered with the provider

use crate::action::ExecAction;
use crate::codes::InstancePolicy;
use crate::trigger::{Cadence, TriggerSpec, TriggerType};
use serde::Serialize;

/// Common restart intervals (ISO-8601 durations)
pub mod restart_interval {
    pub const ONE_MINUTE: &str = "PT1M";
    pub const FIVE_MINUTES: &str = "PT5M";
    pub const TEN_MINUTES: &str = "PT10M";
    pub const FIFTEEN_MINUTES: &str = "PT15M";
    pub const THIRTY_MINUTES: &str = "PT30M";
    pub const ONE_HOUR: &str = "PT1H";
    pub const TWO_HOURS: &str = "PT2H";
}

/// Common execution time limits (ISO-8601 durations)
pub mod execution_limit {
    pub const ONE_HOUR: &str = "PT1H";
    pub const TWO_HOURS: &str = "PT2H";
    pub const FOUR_HOURS: &str = "PT4H";
    pub const EIGHT_HOURS: &str = "PT8H";
    pub const ONE_DAY: &str = "P1D";
    pub const THREE_DAYS: &str = "PT72H";
    /// Run indefinitely
    pub const UNLIMITED: &str = "PT0S";
}

/// Administrative details of a definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationInfo {
    pub author: String,
    pub description: String,
    pub source: String,
    /// Registration date as reported by the provider (ISO-8601 text)
    pub date: Option<String>,
}

/// The eight per-task settings this layer reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSettings {
    pub allow_demand_start: bool,
    pub start_when_available: bool,
    pub enabled: bool,
    pub hidden: bool,
    /// Empty when the task is not restarted on failure
    pub restart_interval: String,
    pub restart_count: u32,
    pub execution_time_limit: String,
    pub multiple_instances: InstancePolicy,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            allow_demand_start: true,
            start_when_available: false,
            enabled: true,
            hidden: false,
            restart_interval: String::new(),
            restart_count: 0,
            execution_time_limit: execution_limit::THREE_DAYS.to_string(),
            multiple_instances: InstancePolicy::IgnoreNew,
        }
    }
}

/// A trigger as stored on a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub trigger_type: TriggerType,
    pub start_boundary: String,
    pub cadence: Cadence,
}

impl From<&TriggerSpec> for Trigger {
    fn from(spec: &TriggerSpec) -> Self {
        Self {
            trigger_type: spec.cadence.trigger_type(),
            start_boundary: spec.start_boundary(),
            cadence: spec.cadence.clone(),
        }
    }
}

/// An unregistered (or fetched) task definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDefinition {
    pub registration_info: RegistrationInfo,
    pub settings: TaskSettings,
    pub triggers: Vec<Trigger>,
    pub actions: Vec<ExecAction>,
}

impl TaskDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_trigger(&mut self, trigger: Trigger) -> &mut Self {
        self.triggers.push(trigger);
        self
    }

    pub fn push_action(&mut self, action: ExecAction) -> &mut Self {
        self.actions.push(action);
        self
    }
}
