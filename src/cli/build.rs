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

//! Build command: settings, wizard, environment build, optional scaffolding

use super::display::TableRenderer;
use super::wizard::{run_wizard, ConsoleWizard, WizardChoices};
use crate::domain::config::{LogLevel, LoggingConfig, Settings};
use crate::domain::environment::EnvironmentBuilder;
use crate::domain::metadata::AppInfo;
use crate::domain::project::{ProjectScaffolder, ScaffoldReport};
use crate::infrastructure::command::{CommandRunner, ShellCommandRunner};
use crate::infrastructure::constants::{DEFAULT_ASSETS_DIR, DEFAULT_SETTINGS_FILE, DEFAULT_WORKDIR};
use crate::infrastructure::layout::ProjectLayout;
use crate::shared::error::ScaffoldError;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug, Clone)]
pub struct BuildCommand {
    /// Settings file with `cloud` and `system` sections (.yaml, .yml, .toml or .json)
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE, value_name = "PATH")]
    pub settings: PathBuf,

    /// Directory holding `cloud_templates/` and `source_templates/`
    #[arg(long, default_value = DEFAULT_ASSETS_DIR, value_name = "DIR")]
    pub assets: PathBuf,

    /// Project directory receiving the generated files
    #[arg(long, default_value = DEFAULT_WORKDIR, value_name = "DIR")]
    pub workdir: PathBuf,

    /// Override `system.log_level` (NOTSET, DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub choices: WizardChoices,
    pub app_info: AppInfo,
    pub scaffold: Option<ScaffoldReport>,
}

impl BuildCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let settings = Settings::from(&self.settings)
            .with_context(|| format!("Failed to load settings from {}", self.settings.display()))?;

        LoggingConfig::from_settings(&settings.system)
            .with_level(self.log_level)
            .init();

        let choices = {
            let stdin = std::io::stdin();
            let mut wizard = ConsoleWizard::new(stdin.lock(), std::io::stdout());
            run_wizard(&mut wizard)?
        };

        let runner = ShellCommandRunner::new().in_dir(&self.workdir);
        let summary = self.run(choices, &settings, Box::new(runner)).await?;

        let renderer = TableRenderer::new();
        println!(
            "{}",
            renderer.render_app_info(&summary.app_info, summary.choices.flavor)
        );
        println!("{}", renderer.render_scaffold_report(summary.scaffold.as_ref()));

        Ok(())
    }

    /// Everything after the prompts; no terminal access
    pub async fn run(
        &self,
        choices: WizardChoices,
        settings: &Settings,
        runner: Box<dyn CommandRunner>,
    ) -> anyhow::Result<BuildSummary> {
        let layout = self.layout();
        std::fs::create_dir_all(layout.workdir()).with_context(|| {
            format!("Failed to create work directory {}", layout.workdir().display())
        })?;

        let builder = EnvironmentBuilder::new(layout.clone(), runner);
        let app_info = match builder.build(choices.flavor, &settings.cloud).await {
            Ok(app_info) => app_info,
            // The environment is left unbuilt but the starter project is still created
            Err(e @ ScaffoldError::StaticIpUnavailable { .. }) => {
                error!("Cloud environment build aborted: {}", e);
                Self::scaffold(&layout, &choices)?;
                return Err(e).context("Cloud environment build failed");
            }
            Err(e) => return Err(e).context("Cloud environment build failed"),
        };

        let scaffold = Self::scaffold(&layout, &choices)?;

        Ok(BuildSummary {
            choices,
            app_info,
            scaffold,
        })
    }

    fn scaffold(
        layout: &ProjectLayout,
        choices: &WizardChoices,
    ) -> anyhow::Result<Option<ScaffoldReport>> {
        if !choices.create_project {
            return Ok(None);
        }

        let report = ProjectScaffolder::new(layout.clone())
            .scaffold(choices.flavor)
            .context("Base project scaffolding failed")?;
        Ok(Some(report))
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.assets, &self.workdir)
    }
}
