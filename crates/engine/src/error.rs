// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the scheduler façade

use crate::config::ConfigError;
use std::fmt;
use taskdeck_adapters::ProviderError;
use taskdeck_core::XmlError;
use taskdeck_tables::TableError;
use thiserror::Error;

/// What a lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Folder,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Folder => write!(f, "folder"),
            EntityKind::Task => write!(f, "task"),
        }
    }
}

/// Errors that can occur in the scheduler façade
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },
    #[error("{kind} already exists: {name}")]
    AlreadyExists { kind: EntityKind, name: String },
    #[error("not implemented: {0}")]
    Unimplemented(String),
    #[error("invalid trigger: {0}")]
    InvalidTrigger(String),
    #[error("provider error: {0}")]
    Provider(ProviderError),
    #[error("malformed task definition: {0}")]
    Definition(#[from] XmlError),
    #[error("invalid event timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("table export failed: {0}")]
    Export(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl SchedulerError {
    pub fn folder_not_found(name: impl Into<String>) -> Self {
        SchedulerError::NotFound {
            kind: EntityKind::Folder,
            name: name.into(),
        }
    }

    pub fn task_not_found(name: impl Into<String>) -> Self {
        SchedulerError::NotFound {
            kind: EntityKind::Task,
            name: name.into(),
        }
    }
}

/// Missing or colliding entities become lookup errors; everything else is
/// surfaced as the provider reported it
impl From<ProviderError> for SchedulerError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::FolderNotFound(name) => SchedulerError::folder_not_found(name),
            ProviderError::TaskNotFound(name) => SchedulerError::task_not_found(name),
            ProviderError::FolderExists(name) => SchedulerError::AlreadyExists {
                kind: EntityKind::Folder,
                name,
            },
            other => SchedulerError::Provider(other),
        }
    }
}

impl From<TableError> for SchedulerError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Timestamp { value, source } => SchedulerError::Timestamp { value, source },
            TableError::Json(e) => SchedulerError::Export(e.to_string()),
        }
    }
}
