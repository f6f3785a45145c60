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
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of a completed build, written to `app_info.yaml`.
///
/// Field order is the serialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub project_id: String,
    pub gke_cluster_name: String,
    pub gke_cluster_region: String,
    pub repo_name: String,
    pub app_name: String,
    pub iam_service_account_name: String,
    pub gke_service_account_name: String,
    pub gke_namespace: String,
    pub app_title: String,
    pub app_description: String,
    pub app_version: String,
    pub deployment_name: String,
    pub hpa_name: String,
    pub trigger_name: String,
    #[serde(flatten)]
    pub service: Option<ServiceInfo>,
}

/// Names and addresses that only exist for the networked flavor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service_name: String,
    pub certificate_name: String,
    pub tls_name: String,
    pub ingress_name: String,
    pub ip_name: String,
    pub ip_address: String,
    pub endpoint_url: String,
}

impl AppInfo {
    /// Number of fields present for every flavor
    pub const BASE_FIELD_COUNT: usize = 14;

    /// Ordered key/value view, used for display
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            ("project_id", self.project_id.as_str()),
            ("gke_cluster_name", self.gke_cluster_name.as_str()),
            ("gke_cluster_region", self.gke_cluster_region.as_str()),
            ("repo_name", self.repo_name.as_str()),
            ("app_name", self.app_name.as_str()),
            ("iam_service_account_name", self.iam_service_account_name.as_str()),
            ("gke_service_account_name", self.gke_service_account_name.as_str()),
            ("gke_namespace", self.gke_namespace.as_str()),
            ("app_title", self.app_title.as_str()),
            ("app_description", self.app_description.as_str()),
            ("app_version", self.app_version.as_str()),
            ("deployment_name", self.deployment_name.as_str()),
            ("hpa_name", self.hpa_name.as_str()),
            ("trigger_name", self.trigger_name.as_str()),
        ];

        if let Some(service) = &self.service {
            entries.extend([
                ("service_name", service.service_name.as_str()),
                ("certificate_name", service.certificate_name.as_str()),
                ("tls_name", service.tls_name.as_str()),
                ("ingress_name", service.ingress_name.as_str()),
                ("ip_name", service.ip_name.as_str()),
                ("ip_address", service.ip_address.as_str()),
                ("endpoint_url", service.endpoint_url.as_str()),
            ]);
        }

        entries
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Overwrite `path` with the YAML form of this record
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ScaffoldError::file_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppInfo {
        AppInfo {
            project_id: "proj".to_string(),
            app_name: "hello".to_string(),
            deployment_name: "hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_yaml_field_order_is_stable() {
        let yaml = sample().to_yaml().unwrap();
        let keys: Vec<&str> = yaml
            .lines()
            .filter_map(|l| l.split(':').next())
            .collect();
        assert_eq!(keys.first(), Some(&"project_id"));
        assert_eq!(keys.last(), Some(&"trigger_name"));
        assert_eq!(keys.len(), AppInfo::BASE_FIELD_COUNT);
        assert!(!yaml.contains("ip_address"));
    }

    #[test]
    fn test_service_fields_follow_base_fields() {
        let mut info = sample();
        info.service = Some(ServiceInfo {
            service_name: "hello-service".to_string(),
            ip_address: "10.0.0.1".to_string(),
            endpoint_url: "hello.endpoints.proj.cloud.goog".to_string(),
            ..Default::default()
        });

        let yaml = info.to_yaml().unwrap();
        assert!(yaml.contains("\nservice_name: hello-service\n"));
        assert!(yaml.find("trigger_name").unwrap() < yaml.find("service_name").unwrap());

        let entries = info.entries();
        assert_eq!(entries.len(), 21);
        assert_eq!(entries[14], ("service_name", "hello-service"));
        assert_eq!(entries[20], ("endpoint_url", "hello.endpoints.proj.cloud.goog"));
    }
}
