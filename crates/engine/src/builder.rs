// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writing triggers and actions into a task definition

use crate::SchedulerError;
use taskdeck_core::{ActionSpec, Cadence, TaskDefinition, Trigger, TriggerSpec};

/// Check the cadence fields a trigger of this kind needs
pub fn validate_trigger(spec: &TriggerSpec) -> Result<(), SchedulerError> {
    let kind = spec.kind();
    let problem = match &spec.cadence {
        Cadence::Daily { days_interval } if *days_interval == 0 => {
            Some("days_interval must be at least 1")
        }
        Cadence::Weekly { weeks_interval, .. } if *weeks_interval == 0 => {
            Some("weeks_interval must be at least 1")
        }
        Cadence::Weekly { days_of_week, .. } if days_of_week.is_empty() => {
            Some("no days of week selected")
        }
        Cadence::Monthly { days_of_month, .. } if days_of_month.is_empty() => {
            Some("no days of month selected")
        }
        Cadence::Monthly { months_of_year, .. } if months_of_year.is_empty() => {
            Some("no months selected")
        }
        Cadence::MonthlyDayOfWeek { days_of_week, .. } if days_of_week.is_empty() => {
            Some("no days of week selected")
        }
        Cadence::MonthlyDayOfWeek { months_of_year, .. } if months_of_year.is_empty() => {
            Some("no months selected")
        }
        Cadence::MonthlyDayOfWeek { weeks_of_month, .. } if weeks_of_month.is_empty() => {
            Some("no weeks of month selected")
        }
        _ => None,
    };

    match problem {
        Some(problem) => Err(SchedulerError::InvalidTrigger(format!("{}: {}", kind, problem))),
        None => Ok(()),
    }
}

/// Validate a trigger spec and append it to the definition
pub fn build_trigger(
    definition: &mut TaskDefinition,
    spec: &TriggerSpec,
) -> Result<(), SchedulerError> {
    validate_trigger(spec)?;
    let trigger = Trigger::from(spec);
    tracing::debug!(
        kind = %spec.kind(),
        trigger_type = trigger.trigger_type.code(),
        start_boundary = %trigger.start_boundary,
        "trigger built"
    );
    definition.push_trigger(trigger);
    Ok(())
}

/// Append an action to the definition; only exec actions can be built
pub fn build_action(
    definition: &mut TaskDefinition,
    action: &ActionSpec,
) -> Result<(), SchedulerError> {
    match action {
        ActionSpec::Exec(exec) => {
            tracing::debug!(path = %exec.path, "exec action built");
            definition.push_action(exec.clone());
            Ok(())
        }
        ActionSpec::ComHandler | ActionSpec::SendEmail | ActionSpec::ShowMessage => Err(
            SchedulerError::Unimplemented(format!("{} action", action.kind())),
        ),
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
