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

//! Deployment settings read from `assets/settings.yaml` (or `.toml` / `.json`)

use super::logging::LogLevel;
use crate::shared::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

/// Top-level settings document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cloud: CloudSettings,
    pub system: SystemSettings,
}

/// `cloud` section: deployment parameters.
///
/// Required identifiers default to empty strings so that a missing key is
/// reported by label validation together with every other offender.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CloudSettings {
    pub project_id: String,
    pub gke_cluster_name: String,
    pub gke_cluster_region: String,
    pub repo_name: String,
    pub app_name: String,
    pub iam_service_account_name: Option<String>,
    pub gke_service_account_name: Option<String>,
    pub gke_namespace: Option<String>,
    pub app_title: Option<String>,
    pub app_description: Option<String>,
    pub app_version: Option<String>,
}

/// `system` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SystemSettings {
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Yaml,
    Toml,
    Json,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => Err(ScaffoldError::config_error(format!(
                "Unsupported settings file extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

impl Settings {
    /// Load settings, picking the parser from the file extension
    pub fn from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = SettingsFormat::from_path(path)?;

        let content = read_to_string(path).map_err(|e| {
            ScaffoldError::config_error(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content, format)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, SettingsFormat::Yaml)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, SettingsFormat::Toml)
    }

    fn parse(content: &str, format: SettingsFormat) -> Result<Self> {
        let settings = match format {
            SettingsFormat::Yaml => serde_yaml::from_str(content)?,
            SettingsFormat::Toml => toml::from_str(content)?,
            SettingsFormat::Json => serde_json::from_str(content)?,
        };
        Ok(settings)
    }
}
