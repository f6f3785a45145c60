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

//! Logging configuration passed explicitly to the entry point

use super::settings::SystemSettings;
use crate::shared::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log level names accepted in `system.log_level`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    NotSet,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::NotSet => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// `tracing` filter directive; NOTSET lets everything through
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::NotSet => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, ScaffoldError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NOTSET" => Ok(LogLevel::NotSet),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(ScaffoldError::ConfigError(format!("Invalid log level: {}", s))),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ScaffoldError;

    fn try_from(value: String) -> Result<Self, ScaffoldError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub ansi: bool,
}

impl LoggingConfig {
    pub fn from_settings(system: &SystemSettings) -> Self {
        Self {
            level: system.log_level,
            ansi: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_level(mut self, level: Option<LogLevel>) -> Self {
        if let Some(level) = level {
            self.level = level;
        }
        self
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.level.as_directive())
    }

    /// Install the global subscriber. A second call leaves the first one in place.
    pub fn init(&self) {
        let result = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_ansi(self.ansi)
            .with_target(false)
            .try_init();

        if let Err(e) = result {
            tracing::debug!("Logging already initialized: {}", e);
        }
    }
}
