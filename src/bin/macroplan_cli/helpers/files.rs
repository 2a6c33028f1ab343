// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON document helpers for macroplan-cli
// ABOUTME: Reads and writes athlete and plan files with path context on failure

use std::fs;
use std::path::Path;

use macroplan::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Load a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_resource_id(path.display().to_string())
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("{}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })
}

/// Write a JSON document, pretty-printed
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    fs::write(path, body)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    debug!(path = %path.display(), "Wrote document");
    Ok(())
}

/// Write plain text
pub fn write_text(path: &Path, body: &str) -> AppResult<()> {
    fs::write(path, body)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}
