// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A handle on one scheduler folder

use crate::error::EntityKind;
use crate::SchedulerError;
use std::collections::BTreeSet;
use taskdeck_adapters::{Registration, SchedulerProvider};
use taskdeck_core::{join_folder_path, leaf_name, FolderRecord, RegisteredTask, TaskDefinition};

/// A folder resolved through a connected provider
///
/// Holds only the folder's path; contents are re-read on every call.
#[derive(Debug, Clone)]
pub struct TaskFolder<'a, P> {
    provider: &'a P,
    registration: Registration,
    path: String,
}

impl<'a, P: SchedulerProvider> TaskFolder<'a, P> {
    pub(crate) fn new(provider: &'a P, registration: Registration, path: String) -> Self {
        Self {
            provider,
            registration,
            path,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Folder name; the root folder is named after its path
    pub fn name(&self) -> &str {
        match leaf_name(&self.path) {
            "" => &self.path,
            name => name,
        }
    }

    pub fn info(&self) -> Result<FolderRecord, SchedulerError> {
        Ok(FolderRecord {
            name: self.name().to_string(),
            path: self.path.clone(),
            subfolders: self.subfolders()?.into_iter().collect::<BTreeSet<_>>(),
            tasks: self.tasks()?.into_iter().collect::<BTreeSet<_>>(),
        })
    }

    pub fn subfolders(&self) -> Result<Vec<String>, SchedulerError> {
        Ok(self.provider.list_subfolders(&self.path)?)
    }

    pub fn tasks(&self) -> Result<Vec<String>, SchedulerError> {
        Ok(self.provider.list_tasks(&self.path)?)
    }

    /// Create a direct subfolder and return a handle on it
    pub fn create_folder(&self, name: &str) -> Result<TaskFolder<'a, P>, SchedulerError> {
        let path = join_folder_path(&self.path, name);
        if self.subfolders()?.iter().any(|s| s == name) {
            return Err(SchedulerError::AlreadyExists {
                kind: EntityKind::Folder,
                name: path,
            });
        }
        self.provider.create_folder(&self.path, name)?;
        tracing::info!(path = %path, "folder created");
        Ok(TaskFolder::new(self.provider, self.registration.clone(), path))
    }

    /// Delete a direct subfolder
    pub fn delete_folder(&self, name: &str) -> Result<(), SchedulerError> {
        let path = join_folder_path(&self.path, name);
        if !self.subfolders()?.iter().any(|s| s == name) {
            return Err(SchedulerError::folder_not_found(path));
        }
        self.provider.delete_folder(&self.path, name)?;
        tracing::info!(path = %path, "folder deleted");
        Ok(())
    }

    /// Live snapshot of a task in this folder
    pub fn get_task(&self, name: &str) -> Result<RegisteredTask, SchedulerError> {
        if !self.tasks()?.iter().any(|t| t == name) {
            return Err(SchedulerError::task_not_found(join_folder_path(
                &self.path, name,
            )));
        }
        Ok(self.provider.get_task(&self.path, name)?)
    }

    /// Register a definition under `name` with the configured registration
    pub fn register_new_task(
        &self,
        name: &str,
        definition: &TaskDefinition,
    ) -> Result<RegisteredTask, SchedulerError> {
        let task = self
            .provider
            .register_task(&self.path, name, definition, &self.registration)?;
        tracing::info!(path = %task.path, "task registered");
        Ok(task)
    }
}

#[cfg(test)]
#[path = "folder_tests.rs"]
mod tests;
