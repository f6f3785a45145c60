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

#![allow(dead_code)]

use gke_scaffold::{CloudSettings, CommandRunner, ProjectLayout, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Assets and working directory laid out under one temp dir
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let fixture = Self { dir };
        fixture.write_cloud_templates();
        fixture.write_skeletons();
        fs::create_dir_all(fixture.workdir()).unwrap();
        fixture
    }

    pub fn assets(&self) -> PathBuf {
        self.dir.path().join("cloud_assets")
    }

    pub fn workdir(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(self.assets(), self.workdir())
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn work_file(&self, relative: &str) -> PathBuf {
        self.workdir().join(relative)
    }

    pub fn read_work_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_file(relative)).unwrap()
    }

    fn write_cloud_templates(&self) {
        for flavor in ["LocalApp", "ServiceAPI"] {
            self.write(
                &format!("cloud_assets/cloud_templates/{}_cloudbuild.yaml", flavor),
                "image: <VAR_GKE_CLUSTER_REGION>-docker.pkg.dev/<VAR_PROJECT_ID>/<VAR_REPO_NAME>/<VAR_APP_NAME>:<VAR_APP_VERSION>\n",
            );
            self.write(
                &format!("cloud_assets/cloud_templates/{}_deployment.yaml", flavor),
                "name: <VAR_DEPLOY_NAME>\nnamespace: <VAR_GKE_NAMESPACE>\nserviceAccountName: <VAR_GKE_SERVICE_ACCOUNT_NAME>\n",
            );
            self.write(
                &format!("cloud_assets/cloud_templates/{}_hpa.yaml", flavor),
                "name: <VAR_HPA_NAME>\ntarget: <VAR_DEPLOY_NAME>\n",
            );
        }

        self.write(
            "cloud_assets/cloud_templates/ServiceAPI_endpoint.yaml",
            "name: <VAR_APP_NAME>.endpoints.<VAR_PROJECT_ID>.cloud.goog\ntarget: <VAR_STATIC_IP>\n",
        );
        self.write(
            "cloud_assets/cloud_templates/ServiceAPI_certificate.yaml",
            "name: <VAR_CERT_NAME>\ndomain: <VAR_APP_NAME>.endpoints.<VAR_PROJECT_ID>.cloud.goog\n",
        );
        self.write(
            "cloud_assets/cloud_templates/ServiceAPI_service.yaml",
            "name: <VAR_SERVICE_NAME>\nselector: <VAR_APP_NAME>\n",
        );
        self.write(
            "cloud_assets/cloud_templates/ServiceAPI_ingress.yaml",
            "name: <VAR_INGRESS_NAME>\nstaticIp: <VAR_IP_NAME>\ntls: <VAR_TLS_NAME>\n",
        );
        self.write(
            "cloud_assets/cloud_templates/apply_cloud_manifests.sh",
            "gcloud container clusters get-credentials <VAR_GKE_CLUSTER_NAME> --region <VAR_GKE_CLUSTER_REGION> --project <VAR_PROJECT_ID>\nkubectl apply -f kubernetes/\n",
        );
    }

    fn write_skeletons(&self) {
        self.write(
            "cloud_assets/source_templates/LocalApp/run.txt",
            "local entry point\n",
        );
        self.write(
            "cloud_assets/source_templates/LocalApp/source/app.txt",
            "local app\n",
        );
        self.write(
            "cloud_assets/source_templates/LocalApp/source/local_only.txt",
            "only in local\n",
        );
        self.write(
            "cloud_assets/source_templates/ServiceAPI/wsgi.txt",
            "service entry point <VAR_APP_NAME>\n",
        );
        self.write(
            "cloud_assets/source_templates/ServiceAPI/source/app.txt",
            "service app\n",
        );
    }
}

pub fn cloud_settings() -> CloudSettings {
    CloudSettings {
        project_id: "my-project".to_string(),
        gke_cluster_name: "main-cluster".to_string(),
        gke_cluster_region: "us-central1".to_string(),
        repo_name: "apps".to_string(),
        app_name: "hello".to_string(),
        ..Default::default()
    }
}

/// Records every command; answers the static IP lookup with a fixed address
/// and captures the apply script while it still exists.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    pub static_ip: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub scripts: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl RecordingRunner {
    pub fn with_ip(ip: &str) -> Self {
        Self {
            static_ip: ip.to_string(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn scripts(&self) -> Vec<(PathBuf, String)> {
        self.scripts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &str) -> Result<String> {
        self.calls.lock().unwrap().push(command.to_string());

        if command.starts_with("gcloud compute addresses describe") {
            return Ok(self.static_ip.clone());
        }

        if let Some(path) = command
            .strip_prefix("sh '")
            .and_then(|rest| rest.strip_suffix('\''))
        {
            let path = Path::new(path).to_path_buf();
            let content = fs::read_to_string(&path).unwrap_or_default();
            self.scripts.lock().unwrap().push((path, content));
        }

        Ok(String::new())
    }
}
