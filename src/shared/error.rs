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

use std::path::PathBuf;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid RFC 1123 label(s): {}", .fields.join(" "))]
    InvalidLabels { fields: Vec<String> },

    #[error("Placeholder token '{token}' is not of the form <VAR_NAME>")]
    InvalidPlaceholder { token: String },

    #[error("Placeholder token '{token}' is already defined")]
    DuplicatePlaceholder { token: String },

    #[error("Value for '{token}' contains a placeholder marker: '{value}'")]
    PlaceholderInValue { token: String, value: String },

    #[error("File error at '{}': {source}", .path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run command '{command}': {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Static IP address '{ip_name}' could not be fetched")]
    StaticIpUnavailable { ip_name: String },

    #[error("Prompt input closed before a choice was made")]
    PromptClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ScaffoldError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    pub fn command(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Command {
            command: command.into(),
            source,
        }
    }
}
