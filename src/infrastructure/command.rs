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

use crate::shared::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, error, warn};

/// Runs free-form shell commands and hands back their output.
///
/// The returned string is trimmed stdout. Exit status is not part of the
/// contract: an empty string may mean success without output or failure.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<String>;
}

/// Single-quote `path` for a POSIX shell; embedded quotes become `'\''`
pub fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.to_string_lossy().replace('\'', "'\\''"))
}

/// Executes commands through the host shell, one at a time
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner {
    current_dir: Option<PathBuf>,
}

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `dir` instead of the process working directory
    pub fn in_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    fn shell_command(&self, command: &str) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        };

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait::async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn run(&self, command: &str) -> Result<String> {
        debug!("Running: {}", command);

        let output = self
            .shell_command(command)
            .output()
            .await
            .map_err(|e| ScaffoldError::command(command, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
            debug!("{}", line);
        }

        for line in stderr.lines().map(str::trim).filter(|l| !l.is_empty()) {
            error!("{}", line);
        }

        if !output.status.success() {
            warn!("Command exited with {}: {}", output.status, command);
        }

        Ok(stdout.trim().to_string())
    }
}
