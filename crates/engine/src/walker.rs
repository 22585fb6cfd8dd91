// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Depth-first walks over the folder tree

use crate::extract::extract;
use crate::SchedulerError;
use taskdeck_adapters::SchedulerProvider;
use taskdeck_core::{join_folder_path, TaskRecord};

/// Records for every task under `root`
///
/// Each folder contributes its own tasks (in provider order) before any of
/// its subfolders are visited. The first failure aborts the walk.
pub fn enumerate_all_tasks<P: SchedulerProvider>(
    provider: &P,
    root: &str,
) -> Result<Vec<TaskRecord>, SchedulerError> {
    let mut records = Vec::new();
    walk_folder(provider, root, &mut records)?;
    tracing::debug!(root, count = records.len(), "walk complete");
    Ok(records)
}

fn walk_folder<P: SchedulerProvider>(
    provider: &P,
    folder: &str,
    records: &mut Vec<TaskRecord>,
) -> Result<(), SchedulerError> {
    if !provider.folder_exists(folder)? {
        return Err(SchedulerError::folder_not_found(folder));
    }

    let tasks = provider.list_tasks(folder)?;
    tracing::debug!(folder, tasks = tasks.len(), "walking folder");
    for name in tasks {
        let task = provider.get_task(folder, &name)?;
        records.push(extract(&task)?);
    }

    for subfolder in provider.list_subfolders(folder)? {
        walk_folder(provider, &join_folder_path(folder, &subfolder), records)?;
    }
    Ok(())
}

/// Path of the first folder named `name` below `folder`
///
/// Subfolders are checked in provider order, and each one is searched
/// recursively before its next sibling.
pub fn find_folder<P: SchedulerProvider>(
    provider: &P,
    folder: &str,
    name: &str,
) -> Result<Option<String>, SchedulerError> {
    for subfolder in provider.list_subfolders(folder)? {
        let path = join_folder_path(folder, &subfolder);
        if subfolder == name {
            return Ok(Some(path));
        }
        if let Some(found) = find_folder(provider, &path, name)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
