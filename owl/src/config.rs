// Copyright 2025 The Owl Rust Authors
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

use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use owl_common::log::Level;
use owl_error::OwlError;
use owl_error::OwlResult;
use serde::Deserialize;
use serde::Serialize;

use crate::owl::StaticTopicActions;

/// Settings of an owl admin process
///
/// ```yaml
/// log_level: DEBUG
/// snapshot: ./cluster.yaml
/// topic_actions:
///   default_actions: [seeTopic, viewPartitions]
///   overrides:
///     payments: [seeTopic]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwlConfig {
    /// Unset leaves the filter to `RUST_LOG`
    #[serde(default)]
    pub log_level: Option<String>,

    /// Cluster snapshot served by the static admin
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    #[serde(default)]
    pub topic_actions: StaticTopicActions,
}

impl OwlConfig {
    /// Load and validate a config file (YAML, JSON or TOML, by extension)
    pub fn from_file(path: impl AsRef<Path>) -> OwlResult<Self> {
        let config: OwlConfig = owl_common::ParseConfigFile::parse_config_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OwlResult<()> {
        if let Some(level) = &self.log_level {
            Level::from_str(level)?;
        }

        if self.topic_actions.default_actions.is_empty() {
            return Err(OwlError::config_invalid(
                "topic_actions.default_actions",
                "[]",
                "at least one action is required",
            ));
        }
        if let Some((topic, _)) = self
            .topic_actions
            .overrides
            .iter()
            .find(|(_, actions)| actions.is_empty())
        {
            return Err(OwlError::config_invalid(
                "topic_actions.overrides",
                topic.clone(),
                "at least one action is required",
            ));
        }
        Ok(())
    }

    pub fn snapshot_path(&self) -> OwlResult<&Path> {
        self.snapshot
            .as_deref()
            .ok_or_else(|| OwlError::config_missing("snapshot"))
    }
}
