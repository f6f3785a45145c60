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

/// Default locations, relative to the current directory
pub const DEFAULT_SETTINGS_FILE: &str = "assets/settings.yaml";
pub const DEFAULT_ASSETS_DIR: &str = "cloud_assets";
pub const DEFAULT_WORKDIR: &str = ".";

/// Asset layout
pub const CLOUD_TEMPLATES_DIR: &str = "cloud_templates";
pub const SOURCE_TEMPLATES_DIR: &str = "source_templates";
pub const APPLY_SCRIPT_TEMPLATE: &str = "apply_cloud_manifests.sh";

/// Generated artifacts
pub const KUBERNETES_DIR: &str = "kubernetes";
pub const CLOUDBUILD_FILE: &str = "cloudbuild.yaml";
pub const APP_INFO_FILE: &str = "app_info.yaml";

/// Apply script temp file
pub const APPLY_SCRIPT_PREFIX: &str = "apply_cloud_manifests";
pub const APPLY_SCRIPT_SUFFIX: &str = ".sh";

/// Setting defaults
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Resource name suffixes
pub const SUFFIX_IAM_SERVICE_ACCOUNT: &str = "-iam-sa";
pub const SUFFIX_GKE_SERVICE_ACCOUNT: &str = "-gke-sa";
pub const SUFFIX_HPA: &str = "-hpa";
pub const SUFFIX_SERVICE: &str = "-service";
pub const SUFFIX_CERTIFICATE: &str = "-certificate";
pub const SUFFIX_TLS: &str = "-tls";
pub const SUFFIX_INGRESS: &str = "-ingress";
pub const SUFFIX_TRIGGER: &str = "-trigger";
pub const SUFFIX_IP: &str = "-ip";

/// Placeholder tokens
pub const VAR_PROJECT_ID: &str = "<VAR_PROJECT_ID>";
pub const VAR_IAM_SERVICE_ACCOUNT_NAME: &str = "<VAR_IAM_SERVICE_ACCOUNT_NAME>";
pub const VAR_GKE_CLUSTER_NAME: &str = "<VAR_GKE_CLUSTER_NAME>";
pub const VAR_GKE_CLUSTER_REGION: &str = "<VAR_GKE_CLUSTER_REGION>";
pub const VAR_GKE_SERVICE_ACCOUNT_NAME: &str = "<VAR_GKE_SERVICE_ACCOUNT_NAME>";
pub const VAR_GKE_NAMESPACE: &str = "<VAR_GKE_NAMESPACE>";
pub const VAR_REPO_NAME: &str = "<VAR_REPO_NAME>";
pub const VAR_APP_NAME: &str = "<VAR_APP_NAME>";
pub const VAR_APP_TITLE: &str = "<VAR_APP_TITLE>";
pub const VAR_APP_DESCRIPTION: &str = "<VAR_APP_DESCRIPTION>";
pub const VAR_APP_VERSION: &str = "<VAR_APP_VERSION>";
pub const VAR_DEPLOY_NAME: &str = "<VAR_DEPLOY_NAME>";
pub const VAR_HPA_NAME: &str = "<VAR_HPA_NAME>";
pub const VAR_SERVICE_NAME: &str = "<VAR_SERVICE_NAME>";
pub const VAR_CERT_NAME: &str = "<VAR_CERT_NAME>";
pub const VAR_TLS_NAME: &str = "<VAR_TLS_NAME>";
pub const VAR_INGRESS_NAME: &str = "<VAR_INGRESS_NAME>";
pub const VAR_TRIGGER_NAME: &str = "<VAR_TRIGGER_NAME>";
pub const VAR_IP_NAME: &str = "<VAR_IP_NAME>";
pub const VAR_STATIC_IP: &str = "<VAR_STATIC_IP>";

/// Marker that no replacement value may contain
pub const PLACEHOLDER_MARKER: &str = "<VAR_";

/// Static IP provisioning commands (rendered before execution)
pub const CREATE_STATIC_IP_COMMAND: &str =
    "gcloud compute addresses create <VAR_IP_NAME> --region=<VAR_GKE_CLUSTER_REGION>";
pub const FETCH_STATIC_IP_COMMAND: &str = "gcloud compute addresses describe <VAR_IP_NAME> \
     --region=<VAR_GKE_CLUSTER_REGION> --format=\"get(address)\"";

/// Cloud Endpoints DNS name
pub const ENDPOINT_URL_TEMPLATE: &str = "<VAR_APP_NAME>.endpoints.<VAR_PROJECT_ID>.cloud.goog";
