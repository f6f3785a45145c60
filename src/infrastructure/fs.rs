// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filesystem helpers for manifest generation and skeleton copies

use crate::domain::render::{unresolved_placeholders, ReplacementTable};
use crate::shared::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Render `source` with `table` and write the result to `target`.
///
/// Parent directories of `target` are created; an existing file is overwritten.
pub fn generate_manifest(source: &Path, target: &Path, table: &ReplacementTable) -> Result<()> {
    let content = fs::read_to_string(source).map_err(|e| ScaffoldError::file_io(source, e))?;
    let rendered = table.render(&content);

    for token in unresolved_placeholders(&rendered) {
        warn!(
            "Unresolved placeholder {} in {}",
            token,
            source.display()
        );
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::file_io(parent, e))?;
        }
    }

    fs::write(target, rendered).map_err(|e| ScaffoldError::file_io(target, e))
}

/// Every regular file below `root`, sorted. A missing root yields nothing.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Copy a text file, creating the destination's parent directories.
pub fn copy_text_file(source: &Path, target: &Path) -> Result<()> {
    let content = fs::read_to_string(source).map_err(|e| ScaffoldError::file_io(source, e))?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::file_io(parent, e))?;
    }

    fs::write(target, content).map_err(|e| ScaffoldError::file_io(target, e))
}

/// Remove a file or directory tree, ignoring any failure.
pub fn remove_best_effort(path: &Path) {
    let result = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => debug!("Removed stale artifact {}", path.display()),
        Err(e) => debug!("Skipped removing {}: {}", path.display(), e),
    }
}
