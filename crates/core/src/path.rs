// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler path helpers
//!
//! Folder and task paths are `\`-separated and always start with `\`.

/// Path separator used by the scheduler
pub const SEPARATOR: char = '\\';

/// Path of the root folder
pub const ROOT_FOLDER: &str = "\\";

/// Join a child name onto a folder path
pub fn join_folder_path(folder: &str, name: &str) -> String {
    if folder.ends_with(SEPARATOR) {
        format!("{}{}", folder, name)
    } else {
        format!("{}{}{}", folder, SEPARATOR, name)
    }
}

/// Split a path into its segments; the leading separator yields an empty first segment
pub fn split_path(path: &str) -> Vec<String> {
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Top-level folder of a task path
///
/// `\` when the path has at most two segments (a root-level task),
/// otherwise the second segment.
pub fn top_folder_name(path: &str) -> String {
    let segments = split_path(path);
    if segments.len() <= 2 {
        ROOT_FOLDER.to_string()
    } else {
        segments[1].clone()
    }
}

/// Last segment of a path
pub fn leaf_name(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
