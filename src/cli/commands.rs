// CLI command definitions

use super::build::BuildCommand;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gke-scaffold",
    version,
    about = "Scaffold GKE deployment manifests and a starter application",
    long_about = "Renders cloud build and Kubernetes manifests from templates, provisions a static IP \
                  for API services, applies the manifests and optionally copies a starter project. \
                  The application type and scaffolding choice are asked interactively."
)]
pub struct CliArgs {
    #[command(flatten)]
    pub build: BuildCommand,
}
