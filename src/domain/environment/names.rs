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

use crate::domain::config::CloudSettings;
use crate::domain::metadata::{AppInfo, ServiceInfo};
use crate::domain::render::ReplacementTable;
use crate::infrastructure::constants::*;
use crate::shared::error::Result;

/// Every name a build needs, settings plus the fixed-suffix derivations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
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
    pub service_name: String,
    pub certificate_name: String,
    pub tls_name: String,
    pub ingress_name: String,
    pub trigger_name: String,
    pub ip_name: String,
}

impl ResourceNames {
    pub fn derive(cloud: &CloudSettings) -> Self {
        let app = cloud.app_name.as_str();
        let suffixed = |suffix: &str| format!("{}{}", app, suffix);

        Self {
            project_id: cloud.project_id.clone(),
            gke_cluster_name: cloud.gke_cluster_name.clone(),
            gke_cluster_region: cloud.gke_cluster_region.clone(),
            repo_name: cloud.repo_name.clone(),
            app_name: app.to_string(),
            iam_service_account_name: cloud
                .iam_service_account_name
                .clone()
                .unwrap_or_else(|| suffixed(SUFFIX_IAM_SERVICE_ACCOUNT)),
            gke_service_account_name: cloud
                .gke_service_account_name
                .clone()
                .unwrap_or_else(|| suffixed(SUFFIX_GKE_SERVICE_ACCOUNT)),
            gke_namespace: cloud
                .gke_namespace
                .clone()
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            app_title: cloud.app_title.clone().unwrap_or_else(|| app.to_string()),
            app_description: cloud
                .app_description
                .clone()
                .unwrap_or_else(|| app.to_string()),
            app_version: cloud
                .app_version
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            deployment_name: app.to_string(),
            hpa_name: suffixed(SUFFIX_HPA),
            service_name: suffixed(SUFFIX_SERVICE),
            certificate_name: suffixed(SUFFIX_CERTIFICATE),
            tls_name: suffixed(SUFFIX_TLS),
            ingress_name: suffixed(SUFFIX_INGRESS),
            trigger_name: suffixed(SUFFIX_TRIGGER),
            ip_name: suffixed(SUFFIX_IP),
        }
    }

    /// Placeholder table for template rendering; fails if any value carries a token marker
    pub fn replacement_table(&self) -> Result<ReplacementTable> {
        let mut table = ReplacementTable::new();
        let pairs = [
            (VAR_PROJECT_ID, &self.project_id),
            (VAR_IAM_SERVICE_ACCOUNT_NAME, &self.iam_service_account_name),
            (VAR_GKE_CLUSTER_NAME, &self.gke_cluster_name),
            (VAR_GKE_CLUSTER_REGION, &self.gke_cluster_region),
            (VAR_GKE_SERVICE_ACCOUNT_NAME, &self.gke_service_account_name),
            (VAR_GKE_NAMESPACE, &self.gke_namespace),
            (VAR_REPO_NAME, &self.repo_name),
            (VAR_APP_NAME, &self.app_name),
            (VAR_APP_TITLE, &self.app_title),
            (VAR_APP_DESCRIPTION, &self.app_description),
            (VAR_APP_VERSION, &self.app_version),
            (VAR_DEPLOY_NAME, &self.deployment_name),
            (VAR_HPA_NAME, &self.hpa_name),
            (VAR_SERVICE_NAME, &self.service_name),
            (VAR_CERT_NAME, &self.certificate_name),
            (VAR_TLS_NAME, &self.tls_name),
            (VAR_INGRESS_NAME, &self.ingress_name),
            (VAR_TRIGGER_NAME, &self.trigger_name),
            (VAR_IP_NAME, &self.ip_name),
        ];

        for (token, value) in pairs {
            table.insert(token, value.as_str())?;
        }

        Ok(table)
    }

    pub fn app_info(&self) -> AppInfo {
        AppInfo {
            project_id: self.project_id.clone(),
            gke_cluster_name: self.gke_cluster_name.clone(),
            gke_cluster_region: self.gke_cluster_region.clone(),
            repo_name: self.repo_name.clone(),
            app_name: self.app_name.clone(),
            iam_service_account_name: self.iam_service_account_name.clone(),
            gke_service_account_name: self.gke_service_account_name.clone(),
            gke_namespace: self.gke_namespace.clone(),
            app_title: self.app_title.clone(),
            app_description: self.app_description.clone(),
            app_version: self.app_version.clone(),
            deployment_name: self.deployment_name.clone(),
            hpa_name: self.hpa_name.clone(),
            trigger_name: self.trigger_name.clone(),
            service: None,
        }
    }

    pub fn service_info(&self, ip_address: String, endpoint_url: String) -> ServiceInfo {
        ServiceInfo {
            service_name: self.service_name.clone(),
            certificate_name: self.certificate_name.clone(),
            tls_name: self.tls_name.clone(),
            ingress_name: self.ingress_name.clone(),
            ip_name: self.ip_name.clone(),
            ip_address,
            endpoint_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ScaffoldError;

    fn cloud() -> CloudSettings {
        CloudSettings {
            project_id: "proj".to_string(),
            gke_cluster_name: "cluster".to_string(),
            gke_cluster_region: "us-central1".to_string(),
            repo_name: "repo".to_string(),
            app_name: "hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_and_suffixes() {
        let names = ResourceNames::derive(&cloud());
        assert_eq!(names.iam_service_account_name, "hello-iam-sa");
        assert_eq!(names.gke_service_account_name, "hello-gke-sa");
        assert_eq!(names.gke_namespace, "default");
        assert_eq!(names.app_title, "hello");
        assert_eq!(names.app_description, "hello");
        assert_eq!(names.app_version, "1.0.0");
        assert_eq!(names.deployment_name, "hello");
        assert_eq!(names.hpa_name, "hello-hpa");
        assert_eq!(names.service_name, "hello-service");
        assert_eq!(names.certificate_name, "hello-certificate");
        assert_eq!(names.tls_name, "hello-tls");
        assert_eq!(names.ingress_name, "hello-ingress");
        assert_eq!(names.trigger_name, "hello-trigger");
        assert_eq!(names.ip_name, "hello-ip");
    }

    #[test]
    fn test_overrides_are_used() {
        let mut settings = cloud();
        settings.gke_namespace = Some("apps".to_string());
        settings.app_version = Some("2.3.4".to_string());
        settings.iam_service_account_name = Some("deployer".to_string());

        let names = ResourceNames::derive(&settings);
        assert_eq!(names.gke_namespace, "apps");
        assert_eq!(names.app_version, "2.3.4");
        assert_eq!(names.iam_service_account_name, "deployer");
    }

    #[test]
    fn test_replacement_table_covers_all_tokens() {
        let table = ResourceNames::derive(&cloud()).replacement_table().unwrap();
        assert_eq!(table.len(), 19);
        assert_eq!(table.get(VAR_DEPLOY_NAME), Some("hello"));
        assert_eq!(table.get(VAR_IP_NAME), Some("hello-ip"));
        assert_eq!(table.get(VAR_STATIC_IP), None);
    }

    #[test]
    fn test_marker_in_free_text_is_rejected() {
        let mut settings = cloud();
        settings.app_description = Some("uses <VAR_APP_NAME>".to_string());

        let err = ResourceNames::derive(&settings)
            .replacement_table()
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::PlaceholderInValue { .. }));
    }

    #[test]
    fn test_app_info_has_no_service_section() {
        let info = ResourceNames::derive(&cloud()).app_info();
        assert_eq!(info.hpa_name, "hello-hpa");
        assert!(info.service.is_none());
    }
}
