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

use super::descriptor::TemplateDescriptor;
use super::names::ResourceNames;
use super::validator::validate_cloud_settings;
use crate::domain::config::CloudSettings;
use crate::domain::flavor::AppFlavor;
use crate::domain::metadata::AppInfo;
use crate::domain::render::ReplacementTable;
use crate::infrastructure::command::{shell_quote, CommandRunner};
use crate::infrastructure::constants::{
    APPLY_SCRIPT_PREFIX, APPLY_SCRIPT_SUFFIX, CREATE_STATIC_IP_COMMAND, ENDPOINT_URL_TEMPLATE,
    FETCH_STATIC_IP_COMMAND, VAR_STATIC_IP,
};
use crate::infrastructure::fs::{generate_manifest, remove_best_effort};
use crate::infrastructure::layout::ProjectLayout;
use crate::shared::error::{Result, ScaffoldError};
use tracing::{debug, error, info, warn};

/// Renders the deployment manifests for one application and applies them
pub struct EnvironmentBuilder {
    runner: Box<dyn CommandRunner>,
    layout: ProjectLayout,
}

impl EnvironmentBuilder {
    pub fn new(layout: ProjectLayout, runner: Box<dyn CommandRunner>) -> Self {
        Self { runner, layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run a full build and return the record written to `app_info.yaml`.
    ///
    /// Invalid identifiers fail before anything on disk is touched. For the
    /// networked flavor an empty static IP lookup aborts before any manifest
    /// is generated; the address created just before is left in place.
    pub async fn build(&self, flavor: AppFlavor, cloud: &CloudSettings) -> Result<AppInfo> {
        info!("Building cloud environment...");

        validate_cloud_settings(cloud)?;

        let names = ResourceNames::derive(cloud);
        let mut table = names.replacement_table()?;
        let mut app_info = names.app_info();

        self.remove_stale_artifacts();

        let mut descriptors = TemplateDescriptor::base_set(&self.layout, flavor);

        if flavor.is_networked() {
            let ip_address = self.provision_static_ip(&table, &names.ip_name).await?;
            table.insert(VAR_STATIC_IP, ip_address.as_str())?;

            let endpoint_url = table.render(ENDPOINT_URL_TEMPLATE);
            app_info.service = Some(names.service_info(ip_address, endpoint_url));
            descriptors.extend(TemplateDescriptor::service_set(&self.layout));
        }

        for descriptor in &descriptors {
            debug!(
                "Generating '{}' manifest file...",
                descriptor.kind.file_name()
            );
            generate_manifest(&descriptor.source, &descriptor.target, &table)?;
        }

        self.apply_manifests(&table).await?;

        app_info.write_to(self.layout.app_info_file())?;
        info!(
            "Cloud environment for '{}' written to {}",
            app_info.app_name,
            self.layout.app_info_file().display()
        );

        Ok(app_info)
    }

    fn remove_stale_artifacts(&self) {
        remove_best_effort(&self.layout.kubernetes_dir());
        remove_best_effort(&self.layout.cloudbuild_file());
        remove_best_effort(&self.layout.app_info_file());
    }

    async fn provision_static_ip(&self, table: &ReplacementTable, ip_name: &str) -> Result<String> {
        debug!("Creating static IP...");
        self.runner
            .run(&table.render(CREATE_STATIC_IP_COMMAND))
            .await?;

        debug!("Fetching static IP...");
        let address = self
            .runner
            .run(&table.render(FETCH_STATIC_IP_COMMAND))
            .await?;

        if address.is_empty() {
            error!("Failed to fetch static IP address.");
            return Err(ScaffoldError::StaticIpUnavailable {
                ip_name: ip_name.to_string(),
            });
        }

        Ok(address)
    }

    /// Render the apply script into a temp file, run it, then delete it
    async fn apply_manifests(&self, table: &ReplacementTable) -> Result<()> {
        debug!("Generating shell script file to apply cloud manifests...");
        let script = tempfile::Builder::new()
            .prefix(APPLY_SCRIPT_PREFIX)
            .suffix(APPLY_SCRIPT_SUFFIX)
            .tempfile()?
            .into_temp_path();

        generate_manifest(&self.layout.apply_script_template(), &script, table)?;

        debug!("Applying cloud manifests...");
        let command = format!("sh {}", shell_quote(&script));
        let result = self.runner.run(&command).await;

        if let Err(e) = script.close() {
            warn!("Failed to remove temporary apply script: {}", e);
        }

        result.map(|_| ())
    }
}
