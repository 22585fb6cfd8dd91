// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for table preprocessing and export

use thiserror::Error;

/// Errors that can occur building or exporting a table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid event timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}
