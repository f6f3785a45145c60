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

use crate::shared::error::ScaffoldError;
use std::fmt;

/// Application shape selecting the template set and skeleton tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppFlavor {
    /// Scheduled job that runs without exposing a network endpoint
    LocalApp,
    /// HTTP service reachable through an ingress and a static IP
    ServiceApi,
}

impl AppFlavor {
    pub const ALL: [AppFlavor; 2] = [AppFlavor::LocalApp, AppFlavor::ServiceApi];

    /// Asset prefix used for template and skeleton lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            AppFlavor::LocalApp => "LocalApp",
            AppFlavor::ServiceApi => "ServiceAPI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppFlavor::LocalApp => {
                "A local application that runs as a script without exposing an API"
            }
            AppFlavor::ServiceApi => "An API service that can be accessed over the network",
        }
    }

    pub fn is_networked(&self) -> bool {
        matches!(self, AppFlavor::ServiceApi)
    }
}

impl fmt::Display for AppFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppFlavor {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LocalApp" => Ok(AppFlavor::LocalApp),
            "ServiceAPI" => Ok(AppFlavor::ServiceApi),
            _ => Err(ScaffoldError::ConfigError(format!(
                "Invalid application flavor: {}",
                s
            ))),
        }
    }
}
