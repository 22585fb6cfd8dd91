// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake in-memory provider for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProviderError, Registration, SchedulerProvider};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use taskdeck_core::{join_folder_path, RegisteredTask, TaskDefinition, TaskState, ROOT_FOLDER};

/// "Task has not yet run."
const RESULT_NOT_YET_RUN: i32 = 0x41303;

/// Recorded provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Connect,
    RootFolder,
    FolderExists {
        path: String,
    },
    ListSubfolders {
        folder: String,
    },
    ListTasks {
        folder: String,
    },
    GetTask {
        folder: String,
        name: String,
    },
    CreateFolder {
        folder: String,
        name: String,
    },
    DeleteFolder {
        folder: String,
        name: String,
    },
    NewTaskDefinition,
    RegisterTask {
        folder: String,
        name: String,
        registration: Registration,
    },
}

/// Live state of a fake task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRuntime {
    pub enabled: bool,
    pub state: i32,
    pub next_run_time: Option<NaiveDateTime>,
    pub last_run_time: Option<NaiveDateTime>,
    pub last_task_result: i32,
    pub number_of_missed_runs: u32,
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self {
            enabled: true,
            state: TaskState::Ready.code(),
            next_run_time: None,
            last_run_time: None,
            last_task_result: RESULT_NOT_YET_RUN,
            number_of_missed_runs: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct FakeTask {
    name: String,
    runtime: FakeRuntime,
    definition: TaskDefinition,
    xml_override: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct FakeFolder {
    subfolders: Vec<String>,
    tasks: Vec<FakeTask>,
}

#[derive(Debug)]
struct FakeState {
    connected: bool,
    folders: BTreeMap<String, FakeFolder>,
    failure: Option<String>,
    calls: Vec<ProviderCall>,
}

impl Default for FakeState {
    fn default() -> Self {
        let mut folders = BTreeMap::new();
        folders.insert(ROOT_FOLDER.to_string(), FakeFolder::default());
        Self {
            connected: false,
            folders,
            failure: None,
            calls: Vec::new(),
        }
    }
}

impl FakeState {
    /// Record a call and apply the connection / injected-failure checks
    fn begin(&mut self, call: ProviderCall) -> Result<(), ProviderError> {
        let connecting = call == ProviderCall::Connect;
        self.calls.push(call);
        if let Some(message) = &self.failure {
            return Err(ProviderError::Failed(message.clone()));
        }
        if !connecting && !self.connected {
            return Err(ProviderError::NotConnected);
        }
        Ok(())
    }

    fn folder(&self, path: &str) -> Result<&FakeFolder, ProviderError> {
        self.folders
            .get(path)
            .ok_or_else(|| ProviderError::FolderNotFound(path.to_string()))
    }

    fn folder_mut(&mut self, path: &str) -> Result<&mut FakeFolder, ProviderError> {
        self.folders
            .get_mut(path)
            .ok_or_else(|| ProviderError::FolderNotFound(path.to_string()))
    }
}

/// Fake scheduling provider backed by an in-memory folder tree
///
/// Subfolders and tasks are listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FakeProvider {
    state: Arc<Mutex<FakeState>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().calls.clone()
    }

    /// Make every following call fail with `ProviderError::Failed`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Stop injecting failures
    pub fn clear_failure(&self) {
        self.lock().failure = None;
    }

    /// Seed a folder (and any missing ancestors) without recording a call
    pub fn add_folder(&self, path: &str) {
        let mut state = self.lock();
        let mut parent = ROOT_FOLDER.to_string();
        for segment in path.split('\\').filter(|s| !s.is_empty()) {
            let child = join_folder_path(&parent, segment);
            if !state.folders.contains_key(&child) {
                state.folders.insert(child.clone(), FakeFolder::default());
                if let Some(folder) = state.folders.get_mut(&parent) {
                    folder.subfolders.push(segment.to_string());
                }
            }
            parent = child;
        }
    }

    /// Seed a task without recording a call; replaces a task of the same name
    pub fn add_task(
        &self,
        folder: &str,
        name: &str,
        definition: TaskDefinition,
        runtime: FakeRuntime,
    ) {
        self.add_folder(folder);
        let mut state = self.lock();
        if let Some(f) = state.folders.get_mut(folder) {
            let task = FakeTask {
                name: name.to_string(),
                runtime,
                definition,
                xml_override: None,
            };
            match f.tasks.iter_mut().find(|t| t.name == name) {
                Some(existing) => *existing = task,
                None => f.tasks.push(task),
            }
        }
    }

    /// Replace the live state of a seeded task
    pub fn set_runtime(&self, folder: &str, name: &str, runtime: FakeRuntime) {
        if let Some(task) = self.lock().task_mut(folder, name) {
            task.runtime = runtime;
        }
    }

    /// Serve this XML for a task instead of serializing its definition
    pub fn set_task_xml(&self, folder: &str, name: &str, xml: impl Into<String>) {
        if let Some(task) = self.lock().task_mut(folder, name) {
            task.xml_override = Some(xml.into());
        }
    }

    /// Stored definition of a task
    pub fn definition(&self, folder: &str, name: &str) -> Option<TaskDefinition> {
        let state = self.lock();
        let f = state.folders.get(folder)?;
        f.tasks
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.definition.clone())
    }

    /// Number of tasks with this name in a folder
    pub fn task_count(&self, folder: &str, name: &str) -> usize {
        let state = self.lock();
        state
            .folders
            .get(folder)
            .map(|f| f.tasks.iter().filter(|t| t.name == name).count())
            .unwrap_or(0)
    }

    /// Whether a folder exists
    pub fn has_folder(&self, path: &str) -> bool {
        self.lock().folders.contains_key(path)
    }
}

impl FakeState {
    fn task_mut(&mut self, folder: &str, name: &str) -> Option<&mut FakeTask> {
        self.folders
            .get_mut(folder)?
            .tasks
            .iter_mut()
            .find(|t| t.name == name)
    }
}

fn snapshot(folder: &str, task: &FakeTask) -> Result<RegisteredTask, ProviderError> {
    let xml = match &task.xml_override {
        Some(xml) => xml.clone(),
        None => task
            .definition
            .to_xml()
            .map_err(|e| ProviderError::Failed(e.to_string()))?,
    };
    Ok(RegisteredTask {
        name: task.name.clone(),
        path: join_folder_path(folder, &task.name),
        enabled: task.runtime.enabled,
        state: task.runtime.state,
        next_run_time: task.runtime.next_run_time,
        last_run_time: task.runtime.last_run_time,
        last_task_result: task.runtime.last_task_result,
        number_of_missed_runs: task.runtime.number_of_missed_runs,
        definition: task.definition.clone(),
        xml,
    })
}

/// First trigger's start boundary, as the fake's next scheduled run
fn first_start(definition: &TaskDefinition) -> Option<NaiveDateTime> {
    let boundary = &definition.triggers.first()?.start_boundary;
    NaiveDateTime::parse_from_str(boundary, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

impl SchedulerProvider for FakeProvider {
    fn connect(&self) -> Result<(), ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::Connect)?;
        state.connected = true;
        Ok(())
    }

    fn root_folder(&self) -> Result<String, ProviderError> {
        self.lock().begin(ProviderCall::RootFolder)?;
        Ok(ROOT_FOLDER.to_string())
    }

    fn folder_exists(&self, path: &str) -> Result<bool, ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::FolderExists {
            path: path.to_string(),
        })?;
        Ok(state.folders.contains_key(path))
    }

    fn list_subfolders(&self, folder: &str) -> Result<Vec<String>, ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::ListSubfolders {
            folder: folder.to_string(),
        })?;
        Ok(state.folder(folder)?.subfolders.clone())
    }

    fn list_tasks(&self, folder: &str) -> Result<Vec<String>, ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::ListTasks {
            folder: folder.to_string(),
        })?;
        Ok(state
            .folder(folder)?
            .tasks
            .iter()
            .map(|t| t.name.clone())
            .collect())
    }

    fn get_task(&self, folder: &str, name: &str) -> Result<RegisteredTask, ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::GetTask {
            folder: folder.to_string(),
            name: name.to_string(),
        })?;
        let task = state
            .folder(folder)?
            .tasks
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ProviderError::TaskNotFound(join_folder_path(folder, name)))?;
        snapshot(folder, task)
    }

    fn create_folder(&self, folder: &str, name: &str) -> Result<(), ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::CreateFolder {
            folder: folder.to_string(),
            name: name.to_string(),
        })?;
        let child = join_folder_path(folder, name);
        if state.folders.contains_key(&child) {
            return Err(ProviderError::FolderExists(child));
        }
        state.folder_mut(folder)?.subfolders.push(name.to_string());
        state.folders.insert(child, FakeFolder::default());
        Ok(())
    }

    fn delete_folder(&self, folder: &str, name: &str) -> Result<(), ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::DeleteFolder {
            folder: folder.to_string(),
            name: name.to_string(),
        })?;
        let child = join_folder_path(folder, name);
        let target = state.folder(&child)?;
        if !target.tasks.is_empty() || !target.subfolders.is_empty() {
            return Err(ProviderError::Failed(format!(
                "folder is not empty: {}",
                child
            )));
        }
        state.folders.remove(&child);
        state
            .folder_mut(folder)?
            .subfolders
            .retain(|s| s.as_str() != name);
        Ok(())
    }

    fn new_task_definition(&self) -> Result<TaskDefinition, ProviderError> {
        self.lock().begin(ProviderCall::NewTaskDefinition)?;
        Ok(TaskDefinition::new())
    }

    fn register_task(
        &self,
        folder: &str,
        name: &str,
        definition: &TaskDefinition,
        registration: &Registration,
    ) -> Result<RegisteredTask, ProviderError> {
        let mut state = self.lock();
        state.begin(ProviderCall::RegisterTask {
            folder: folder.to_string(),
            name: name.to_string(),
            registration: registration.clone(),
        })?;

        let path = join_folder_path(folder, name);
        let creation = registration.creation;
        let f = state.folder_mut(folder)?;
        let position = f.tasks.iter().position(|t| t.name == name);

        let index = match position {
            Some(i) if creation.allows_update() => {
                let task = &mut f.tasks[i];
                task.definition = definition.clone();
                task.runtime.enabled = definition.settings.enabled;
                task.xml_override = None;
                i
            }
            Some(_) => return Err(ProviderError::TaskExists(path)),
            None if creation.allows_create() => {
                let enabled = definition.settings.enabled;
                f.tasks.push(FakeTask {
                    name: name.to_string(),
                    runtime: FakeRuntime {
                        enabled,
                        state: if enabled {
                            TaskState::Ready.code()
                        } else {
                            TaskState::Disabled.code()
                        },
                        next_run_time: first_start(definition),
                        ..FakeRuntime::default()
                    },
                    definition: definition.clone(),
                    xml_override: None,
                });
                f.tasks.len() - 1
            }
            None => return Err(ProviderError::TaskNotFound(path)),
        };

        snapshot(folder, &f.tasks[index])
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
