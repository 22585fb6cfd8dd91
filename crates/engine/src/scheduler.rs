// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The scheduler façade

use crate::builder::{build_action, build_trigger};
use crate::config::SchedulerConfig;
use crate::folder::TaskFolder;
use crate::history::collect_history;
use crate::walker::{enumerate_all_tasks, find_folder};
use crate::SchedulerError;
use chrono::NaiveDateTime;
use taskdeck_adapters::{EventLogSource, SchedulerProvider};
use taskdeck_core::{
    ActionSpec, Clock, HistoryRecord, RegisteredTask, SystemClock, TaskDefinition, TaskRecord,
    TaskSettings, TriggerSpec,
};
use taskdeck_tables::{preprocess_history, preprocess_tasks, HistoryRow, TaskRow};

/// Everything needed to create one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Name of the target folder, found anywhere below the root; `None` is the root
    pub folder: Option<String>,
    pub name: String,
    pub description: String,
    pub trigger: TriggerSpec,
    pub action: ActionSpec,
    pub settings: TaskSettings,
}

impl NewTask {
    pub fn new(name: impl Into<String>, trigger: TriggerSpec, action: ActionSpec) -> Self {
        Self {
            folder: None,
            name: name.into(),
            description: String::new(),
            trigger,
            action,
            settings: TaskSettings::default(),
        }
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn settings(mut self, settings: TaskSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Synchronous façade over a scheduling provider
///
/// Every query re-reads provider state; nothing is cached between calls.
pub struct TaskScheduler<P, C = SystemClock> {
    provider: P,
    clock: C,
    config: SchedulerConfig,
}

impl<P: SchedulerProvider> TaskScheduler<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, SchedulerConfig::default())
    }

    pub fn with_config(provider: P, config: SchedulerConfig) -> Self {
        Self::with_clock(provider, config, SystemClock)
    }
}

impl<P: SchedulerProvider, C: Clock> TaskScheduler<P, C> {
    pub fn with_clock(provider: P, config: SchedulerConfig, clock: C) -> Self {
        Self {
            provider,
            clock,
            config,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Current local time, for the "today" table queries
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Open the provider connection and check the root folder exists
    pub fn connect(&self) -> Result<(), SchedulerError> {
        self.provider.connect()?;
        let root = self.root()?;
        if !self.provider.folder_exists(&root)? {
            return Err(SchedulerError::folder_not_found(root));
        }
        tracing::info!(root = %root, "scheduler connected");
        Ok(())
    }

    /// The configured root folder, else the provider's
    fn root(&self) -> Result<String, SchedulerError> {
        match &self.config.root_folder {
            Some(root) => Ok(root.clone()),
            None => Ok(self.provider.root_folder()?),
        }
    }

    /// The root folder, or the first folder named `name` in a depth-first search
    pub fn get_folder(&self, name: Option<&str>) -> Result<TaskFolder<'_, P>, SchedulerError> {
        let root = self.root()?;
        let path = match name {
            None => root,
            Some(name) => find_folder(&self.provider, &root, name)?
                .ok_or_else(|| SchedulerError::folder_not_found(name))?,
        };
        Ok(TaskFolder::new(
            &self.provider,
            self.config.registration.to_registration(),
            path,
        ))
    }

    /// Records for every task below the root
    pub fn enumerate_all_tasks(&self) -> Result<Vec<TaskRecord>, SchedulerError> {
        enumerate_all_tasks(&self.provider, &self.root()?)
    }

    /// The task table for every task below the root
    pub fn get_all_tasks(&self) -> Result<Vec<TaskRow>, SchedulerError> {
        Ok(preprocess_tasks(self.enumerate_all_tasks()?))
    }

    /// Build and register a new task, returning the definition that was registered
    ///
    /// The trigger is built before the action, so an unsupported action is
    /// reported only once the trigger has been accepted.
    pub fn create_task(&self, task: NewTask) -> Result<TaskDefinition, SchedulerError> {
        let folder = self.get_folder(task.folder.as_deref())?;
        let mut definition = self.provider.new_task_definition()?;

        build_trigger(&mut definition, &task.trigger)?;
        build_action(&mut definition, &task.action)?;

        definition.registration_info.description = task.description;
        definition.settings = task.settings;

        folder.register_new_task(&task.name, &definition)?;
        Ok(definition)
    }

    /// Replace the eight settings of an existing task
    pub fn update_task_settings(
        &self,
        folder: Option<&str>,
        task: &str,
        settings: TaskSettings,
    ) -> Result<RegisteredTask, SchedulerError> {
        self.rewrite_task(folder, task, |definition| definition.settings = settings)
    }

    /// Replace the description of an existing task
    pub fn update_registration_info(
        &self,
        folder: Option<&str>,
        task: &str,
        description: &str,
    ) -> Result<RegisteredTask, SchedulerError> {
        self.rewrite_task(folder, task, |definition| {
            definition.registration_info.description = description.to_string()
        })
    }

    fn rewrite_task(
        &self,
        folder: Option<&str>,
        task: &str,
        rewrite: impl FnOnce(&mut TaskDefinition),
    ) -> Result<RegisteredTask, SchedulerError> {
        let folder = self.get_folder(folder)?;
        let mut definition = folder.get_task(task)?.definition;
        rewrite(&mut definition);
        folder.register_new_task(task, &definition)
    }

    /// Describe the configured event log's entries
    pub fn history<E: EventLogSource>(
        &self,
        source: &E,
    ) -> Result<Vec<HistoryRecord>, SchedulerError> {
        collect_history(source, &self.config.history)
    }

    /// The history table for the configured event log
    pub fn history_table<E: EventLogSource>(
        &self,
        source: &E,
    ) -> Result<Vec<HistoryRow>, SchedulerError> {
        Ok(preprocess_history(self.history(source)?)?)
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
