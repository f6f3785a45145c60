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

//! Starter project scaffolding from the skeleton source trees

use crate::domain::flavor::AppFlavor;
use crate::infrastructure::fs::{copy_text_file, list_files};
use crate::infrastructure::layout::ProjectLayout;
use crate::shared::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Outcome of one scaffolding pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub removed: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct ProjectScaffolder {
    layout: ProjectLayout,
}

impl ProjectScaffolder {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    /// Replace any previously scaffolded sources with `flavor`'s skeleton.
    ///
    /// Failures are per file: each one is logged and recorded, the rest continue.
    pub fn scaffold(&self, flavor: AppFlavor) -> Result<ScaffoldReport> {
        info!("Building base project...");
        let mut report = ScaffoldReport::default();

        for other in AppFlavor::ALL {
            for (_, target) in self.mapped_files(other)? {
                if !target.exists() {
                    continue;
                }
                match std::fs::remove_file(&target) {
                    Ok(()) => {
                        debug!("Removed {}", target.display());
                        report.removed.push(target);
                    }
                    Err(e) => {
                        error!(
                            "An error occurred while deleting file {}: {}",
                            target.display(),
                            e
                        );
                        report.failed.push(target);
                    }
                }
            }
        }

        for (source, target) in self.mapped_files(flavor)? {
            match copy_text_file(&source, &target) {
                Ok(()) => {
                    debug!("Copied {} -> {}", source.display(), target.display());
                    report.copied.push(target);
                }
                Err(e) => {
                    error!(
                        "An error occurred while copying file {} to {}: {}",
                        source.display(),
                        target.display(),
                        e
                    );
                    report.failed.push(target);
                }
            }
        }

        info!(
            "Scaffolded {} file(s) for {} ({} removed, {} failed)",
            report.copied.len(),
            flavor,
            report.removed.len(),
            report.failed.len()
        );

        Ok(report)
    }

    /// Skeleton files of `flavor` paired with their working-directory paths
    fn mapped_files(&self, flavor: AppFlavor) -> Result<Vec<(PathBuf, PathBuf)>> {
        let root = self.layout.skeleton_dir(flavor);
        let files = list_files(&root)?;

        Ok(files
            .into_iter()
            .filter_map(|source| {
                let target = map_into(&root, &source, self.layout.workdir())?;
                Some((source, target))
            })
            .collect())
    }
}

fn map_into(root: &Path, source: &Path, workdir: &Path) -> Option<PathBuf> {
    source
        .strip_prefix(root)
        .ok()
        .map(|relative| workdir.join(relative))
}
