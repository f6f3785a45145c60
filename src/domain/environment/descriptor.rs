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

use crate::domain::flavor::AppFlavor;
use crate::infrastructure::layout::ProjectLayout;
use std::path::PathBuf;

/// Logical manifests produced by a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    CloudBuild,
    Deployment,
    Hpa,
    Endpoint,
    Certificate,
    Service,
    Ingress,
}

impl ManifestKind {
    pub const BASE: [ManifestKind; 3] = [
        ManifestKind::CloudBuild,
        ManifestKind::Deployment,
        ManifestKind::Hpa,
    ];

    pub const SERVICE_ONLY: [ManifestKind; 4] = [
        ManifestKind::Endpoint,
        ManifestKind::Certificate,
        ManifestKind::Service,
        ManifestKind::Ingress,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::CloudBuild => "cloudbuild.yaml",
            ManifestKind::Deployment => "deployment.yaml",
            ManifestKind::Hpa => "hpa.yaml",
            ManifestKind::Endpoint => "endpoint.yaml",
            ManifestKind::Certificate => "certificate.yaml",
            ManifestKind::Service => "service.yaml",
            ManifestKind::Ingress => "ingress.yaml",
        }
    }

    pub fn is_service_only(&self) -> bool {
        Self::SERVICE_ONLY.contains(self)
    }
}

/// A template source paired with the file it renders to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub kind: ManifestKind,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl TemplateDescriptor {
    pub fn new(layout: &ProjectLayout, flavor: AppFlavor, kind: ManifestKind) -> Self {
        let source = layout.cloud_template(flavor, kind.file_name());
        let target = match kind {
            ManifestKind::CloudBuild => layout.cloudbuild_file(),
            _ => layout.kubernetes_dir().join(kind.file_name()),
        };

        Self {
            kind,
            source,
            target,
        }
    }

    /// Manifests generated for every flavor
    pub fn base_set(layout: &ProjectLayout, flavor: AppFlavor) -> Vec<Self> {
        ManifestKind::BASE
            .iter()
            .map(|kind| Self::new(layout, flavor, *kind))
            .collect()
    }

    /// Extra manifests for the networked flavor
    pub fn service_set(layout: &ProjectLayout) -> Vec<Self> {
        ManifestKind::SERVICE_ONLY
            .iter()
            .map(|kind| Self::new(layout, AppFlavor::ServiceApi, *kind))
            .collect()
    }
}
