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
use crate::domain::label::is_valid_label;
use crate::shared::error::ScaffoldError;

/// Check every identifier that ends up in a resource name.
///
/// All offending fields are reported at once, in settings order.
pub fn validate_cloud_settings(cloud: &CloudSettings) -> Result<(), ScaffoldError> {
    let mut invalid = Vec::new();

    let required = [
        ("project_id", cloud.project_id.as_str()),
        ("gke_cluster_name", cloud.gke_cluster_name.as_str()),
        ("gke_cluster_region", cloud.gke_cluster_region.as_str()),
    ];
    for (field, value) in required {
        if !is_valid_label(value) {
            invalid.push(field);
        }
    }

    if cloud.repo_name.trim().is_empty() {
        invalid.push("repo_name");
    }

    if !is_valid_label(&cloud.app_name) {
        invalid.push("app_name");
    }

    let optional = [
        ("iam_service_account_name", &cloud.iam_service_account_name),
        ("gke_service_account_name", &cloud.gke_service_account_name),
        ("gke_namespace", &cloud.gke_namespace),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            if !is_valid_label(value) {
                invalid.push(field);
            }
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidLabels {
            fields: invalid.into_iter().map(String::from).collect(),
        })
    }
}
