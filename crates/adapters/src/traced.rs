// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::event_log::EventLogSource;
use crate::provider::{ProviderError, Registration, SchedulerProvider};
use taskdeck_core::{EventLogEntry, RegisteredTask, TaskDefinition, SEPARATOR};

/// Wrapper that adds tracing to any SchedulerProvider
#[derive(Clone)]
pub struct TracedProvider<P> {
    inner: P,
}

impl<P> TracedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: SchedulerProvider> SchedulerProvider for TracedProvider<P> {
    fn connect(&self) -> Result<(), ProviderError> {
        let span = tracing::info_span!("provider.connect");
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.connect();
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "connected"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "connect failed"
            ),
        }

        result
    }

    fn root_folder(&self) -> Result<String, ProviderError> {
        let result = self.inner.root_folder();
        tracing::trace!(root = ?result.as_ref().ok(), "resolved root folder");
        result
    }

    fn folder_exists(&self, path: &str) -> Result<bool, ProviderError> {
        let result = self.inner.folder_exists(path);
        tracing::trace!(path, exists = ?result.as_ref().ok(), "checked folder");
        result
    }

    fn list_subfolders(&self, folder: &str) -> Result<Vec<String>, ProviderError> {
        let result = self.inner.list_subfolders(folder);
        match &result {
            Ok(names) => tracing::trace!(folder, count = names.len(), "listed subfolders"),
            Err(e) => tracing::warn!(folder, error = %e, "list subfolders failed"),
        }
        result
    }

    fn list_tasks(&self, folder: &str) -> Result<Vec<String>, ProviderError> {
        let result = self.inner.list_tasks(folder);
        match &result {
            Ok(names) => tracing::trace!(folder, count = names.len(), "listed tasks"),
            Err(e) => tracing::warn!(folder, error = %e, "list tasks failed"),
        }
        result
    }

    fn get_task(&self, folder: &str, name: &str) -> Result<RegisteredTask, ProviderError> {
        let span = tracing::debug_span!("provider.get_task", folder, name);
        let _guard = span.enter();

        let result = self.inner.get_task(folder, name);
        match &result {
            Ok(task) => tracing::debug!(state = task.state, "fetched"),
            Err(e) => tracing::warn!(error = %e, "get task failed"),
        }
        result
    }

    fn create_folder(&self, folder: &str, name: &str) -> Result<(), ProviderError> {
        let span = tracing::info_span!("provider.create_folder", folder, name);
        let _guard = span.enter();

        // Precondition: a single, non-empty path segment
        if name.is_empty() || name.contains(SEPARATOR) {
            tracing::error!("invalid folder name");
            return Err(ProviderError::Failed(format!(
                "invalid folder name: {:?}",
                name
            )));
        }

        let result = self.inner.create_folder(folder, name);
        match &result {
            Ok(()) => tracing::info!("folder created"),
            Err(e) => tracing::error!(error = %e, "create folder failed"),
        }
        result
    }

    fn delete_folder(&self, folder: &str, name: &str) -> Result<(), ProviderError> {
        let span = tracing::info_span!("provider.delete_folder", folder, name);
        let _guard = span.enter();

        let result = self.inner.delete_folder(folder, name);
        match &result {
            Ok(()) => tracing::info!("folder deleted"),
            Err(e) => tracing::error!(error = %e, "delete folder failed"),
        }
        result
    }

    fn new_task_definition(&self) -> Result<TaskDefinition, ProviderError> {
        self.inner.new_task_definition()
    }

    fn register_task(
        &self,
        folder: &str,
        name: &str,
        definition: &TaskDefinition,
        registration: &Registration,
    ) -> Result<RegisteredTask, ProviderError> {
        let span = tracing::info_span!("provider.register_task", folder, name);
        let _guard = span.enter();

        tracing::info!(
            creation = registration.creation.code(),
            logon = registration.logon.code(),
            triggers = definition.triggers.len(),
            actions = definition.actions.len(),
            "registering"
        );

        let start = std::time::Instant::now();
        let result = self.inner.register_task(folder, name, definition, registration);
        let elapsed = start.elapsed();

        match &result {
            Ok(task) => tracing::info!(
                path = %task.path,
                elapsed_ms = elapsed.as_millis() as u64,
                "task registered"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "register failed"
            ),
        }
        result
    }
}

/// Wrapper that adds tracing to any EventLogSource
#[derive(Clone)]
pub struct TracedEventLog<E> {
    inner: E,
}

impl<E> TracedEventLog<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: EventLogSource> EventLogSource for TracedEventLog<E> {
    fn read_events(&self, log_name: &str) -> Result<Vec<EventLogEntry>, ProviderError> {
        let span = tracing::info_span!("event_log.read", log_name);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.read_events(log_name);
        let elapsed = start.elapsed();

        match &result {
            Ok(events) => tracing::info!(
                count = events.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "events read"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "read failed"
            ),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
