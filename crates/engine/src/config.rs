// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler configuration (TOML)
//!
//! ```toml
//! root_folder = "\\Ops"
//!
//! [registration]
//! creation = "create-or-update"
//! logon = "none"
//!
//! [history]
//! log_name = "Microsoft-Windows-TaskScheduler/Operational"
//! max_events = 500
//! ```

use serde::Deserialize;
use std::path::Path;
use taskdeck_adapters::{Registration, TASK_SCHEDULER_LOG};
use taskdeck_core::{LogonType, TaskCreation};
use thiserror::Error;

/// Errors that can occur loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Folder that walks and unnamed folder lookups start from; `None` is the
    /// provider's root folder
    pub root_folder: Option<String>,
    pub registration: RegistrationConfig,
    pub history: HistoryConfig,
}

/// How new and updated definitions are registered
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrationConfig {
    pub creation: TaskCreation,
    pub logon: LogonType,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl RegistrationConfig {
    pub fn to_registration(&self) -> Registration {
        Registration {
            creation: self.creation,
            logon: self.logon,
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    pub log_name: String,
    /// Keep only the newest `max_events` records
    pub max_events: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            log_name: TASK_SCHEDULER_LOG.to_string(),
            max_events: None,
        }
    }
}

impl SchedulerConfig {
    /// Parse configuration from TOML text; absent fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SchedulerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.root_folder {
            if !root.starts_with(taskdeck_core::SEPARATOR) {
                return Err(ConfigError::Invalid(format!(
                    "root_folder must start with '\\': {}",
                    root
                )));
            }
        }
        if self.history.log_name.is_empty() {
            return Err(ConfigError::Invalid("history.log_name is empty".to_string()));
        }
        if self.registration.password.is_some() && self.registration.user.is_none() {
            return Err(ConfigError::Invalid(
                "registration.password requires registration.user".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
