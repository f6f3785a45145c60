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

// Builds against the templates shipped in cloud_assets/

mod common;

use common::RecordingRunner;
use gke_scaffold::domain::render::unresolved_placeholders;
use gke_scaffold::*;
use std::fs;
use std::path::PathBuf;

fn shipped_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("cloud_assets")
}

fn shipped_settings() -> Settings {
    Settings::from(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/settings.yaml")).unwrap()
}

#[test]
fn test_sample_settings_are_valid() {
    let settings = shipped_settings();
    assert_eq!(settings.cloud.app_name, "hello");
    assert_eq!(settings.system.log_level, LogLevel::Info);
    assert!(settings.cloud.gke_namespace.is_none());
}

#[tokio::test]
async fn test_shipped_templates_resolve_every_placeholder() {
    for flavor in AppFlavor::ALL {
        let workdir = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::with_ip("34.120.1.2");
        let builder = EnvironmentBuilder::new(
            ProjectLayout::new(shipped_assets(), workdir.path()),
            Box::new(runner.clone()),
        );

        builder
            .build(flavor, &shipped_settings().cloud)
            .await
            .unwrap();

        let mut outputs = vec![workdir.path().join("cloudbuild.yaml")];
        for entry in fs::read_dir(workdir.path().join("kubernetes")).unwrap() {
            outputs.push(entry.unwrap().path());
        }
        let expected = if flavor.is_networked() { 7 } else { 3 };
        assert_eq!(outputs.len(), expected, "{flavor}");

        for output in &outputs {
            let content = fs::read_to_string(output).unwrap();
            assert!(
                unresolved_placeholders(&content).is_empty(),
                "{} still has placeholders",
                output.display()
            );
        }

        let (_, script) = runner.scripts().pop().expect("apply script");
        assert!(unresolved_placeholders(&script).is_empty());
        assert!(script.contains("get-credentials main-cluster --region us-central1"));
    }
}

#[test]
fn test_shipped_skeletons_exist_for_every_flavor() {
    let layout = ProjectLayout::new(shipped_assets(), ".");
    for flavor in AppFlavor::ALL {
        let skeleton = layout.skeleton_dir(flavor);
        assert!(skeleton.join("app/Dockerfile").is_file(), "{flavor}");
        assert!(skeleton.join("app/src/main.rs").is_file(), "{flavor}");
    }
}

#[test]
fn test_scaffolding_keeps_host_project_files() {
    let root = tempfile::tempdir().unwrap();
    let host_manifest = "[package]\nname = \"host\"\n";
    let host_main = "fn main() {}\n";
    fs::write(root.path().join("Cargo.toml"), host_manifest).unwrap();
    fs::create_dir_all(root.path().join("src")).unwrap();
    fs::write(root.path().join("src/main.rs"), host_main).unwrap();

    let scaffolder = ProjectScaffolder::new(ProjectLayout::new(shipped_assets(), root.path()));
    for flavor in AppFlavor::ALL {
        let report = scaffolder.scaffold(flavor).unwrap();
        assert!(report.is_clean(), "{flavor}");
        assert!(report
            .removed
            .iter()
            .chain(&report.copied)
            .all(|p| p.starts_with(root.path().join("app"))));
    }

    assert_eq!(fs::read_to_string(root.path().join("Cargo.toml")).unwrap(), host_manifest);
    assert_eq!(fs::read_to_string(root.path().join("src/main.rs")).unwrap(), host_main);
    assert!(root.path().join("app/Cargo.toml").is_file());
    assert!(root.path().join("app/src/main.rs").is_file());
}
