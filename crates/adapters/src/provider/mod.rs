// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task scheduling provider capability
//!
//! The OS scheduling service is reached only through this trait. Folders are
//! addressed by their `\`-separated path; tasks by folder path plus name.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProvider, FakeRuntime, ProviderCall};

use taskdeck_core::{LogonType, RegisteredTask, TaskCreation, TaskDefinition};
use thiserror::Error;

/// Errors surfaced by a provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("not connected to the task scheduler service")]
    NotConnected,
    #[error("folder not found: {0}")]
    FolderNotFound(String),
    #[error("task not found: {0}")]
    TaskNotFound(String),
    #[error("folder already exists: {0}")]
    FolderExists(String),
    #[error("task already exists: {0}")]
    TaskExists(String),
    #[error("provider call failed: {0}")]
    Failed(String),
}

/// How a definition is committed into a folder
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub creation: TaskCreation,
    pub logon: LogonType,
    /// `None` runs the task without stored credentials
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Adapter for the OS task scheduling service
///
/// Calls block until the service answers. Implementations need not be
/// reentrant; one connection serves one caller at a time.
pub trait SchedulerProvider: Clone {
    /// Open the connection to the scheduling service
    fn connect(&self) -> Result<(), ProviderError>;

    /// Path of the root folder
    fn root_folder(&self) -> Result<String, ProviderError>;

    /// Whether a folder exists at this path
    fn folder_exists(&self, path: &str) -> Result<bool, ProviderError>;

    /// Names of the direct subfolders of a folder
    fn list_subfolders(&self, folder: &str) -> Result<Vec<String>, ProviderError>;

    /// Names of the tasks directly in a folder (hidden tasks included)
    fn list_tasks(&self, folder: &str) -> Result<Vec<String>, ProviderError>;

    /// Live snapshot of a registered task
    fn get_task(&self, folder: &str, name: &str) -> Result<RegisteredTask, ProviderError>;

    /// Create a subfolder
    fn create_folder(&self, folder: &str, name: &str) -> Result<(), ProviderError>;

    /// Delete an empty subfolder
    fn delete_folder(&self, folder: &str, name: &str) -> Result<(), ProviderError>;

    /// Fresh definition to fill in before registration
    fn new_task_definition(&self) -> Result<TaskDefinition, ProviderError>;

    /// Commit a definition into a folder under a name
    fn register_task(
        &self,
        folder: &str,
        name: &str,
        definition: &TaskDefinition,
        registration: &Registration,
    ) -> Result<RegisteredTask, ProviderError>;
}
