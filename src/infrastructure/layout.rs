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

use crate::domain::flavor::AppFlavor;
use crate::infrastructure::constants::*;
use std::path::{Path, PathBuf};

/// Fixed paths of the asset tree and the working project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    assets_dir: PathBuf,
    workdir: PathBuf,
}

impl ProjectLayout {
    pub fn new(assets_dir: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            workdir: workdir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn cloud_templates_dir(&self) -> PathBuf {
        self.assets_dir.join(CLOUD_TEMPLATES_DIR)
    }

    /// `<assets>/cloud_templates/<Flavor>_<file_name>`
    pub fn cloud_template(&self, flavor: AppFlavor, file_name: &str) -> PathBuf {
        self.cloud_templates_dir()
            .join(format!("{}_{}", flavor.as_str(), file_name))
    }

    pub fn apply_script_template(&self) -> PathBuf {
        self.cloud_templates_dir().join(APPLY_SCRIPT_TEMPLATE)
    }

    pub fn skeleton_dir(&self, flavor: AppFlavor) -> PathBuf {
        self.assets_dir
            .join(SOURCE_TEMPLATES_DIR)
            .join(flavor.as_str())
    }

    pub fn kubernetes_dir(&self) -> PathBuf {
        self.workdir.join(KUBERNETES_DIR)
    }

    pub fn cloudbuild_file(&self) -> PathBuf {
        self.workdir.join(CLOUDBUILD_FILE)
    }

    pub fn app_info_file(&self) -> PathBuf {
        self.workdir.join(APP_INFO_FILE)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_DIR, DEFAULT_WORKDIR)
    }
}
