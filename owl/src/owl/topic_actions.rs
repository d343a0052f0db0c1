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

//! Actions the requesting principal may run on a topic

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use strum::AsRefStr;
use strum::Display;
use strum::EnumString;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TopicAction {
    All,
    SeeTopic,
    ViewPartitions,
    ViewMessages,
    UseSearchFilter,
    ViewConsumers,
    ViewConfig,
}

/// Supplies the allowed actions of the requesting principal per topic
#[cfg_attr(test, mockall::automock)]
pub trait TopicActionsProvider {
    fn allowed_topic_actions(&self, topic_name: &str) -> Vec<TopicAction>;
}

/// Grants everything on every topic
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllTopicActions;

impl TopicActionsProvider for AllowAllTopicActions {
    fn allowed_topic_actions(&self, _topic_name: &str) -> Vec<TopicAction> {
        vec![TopicAction::All]
    }
}

/// Fixed actions from configuration, with per-topic overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTopicActions {
    #[serde(default = "StaticTopicActions::all")]
    pub default_actions: Vec<TopicAction>,
    #[serde(default)]
    pub overrides: HashMap<String, Vec<TopicAction>>,
}

impl StaticTopicActions {
    fn all() -> Vec<TopicAction> {
        vec![TopicAction::All]
    }

    pub fn new(default_actions: Vec<TopicAction>) -> Self {
        Self {
            default_actions,
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, topic_name: impl Into<String>, actions: Vec<TopicAction>) -> Self {
        self.overrides.insert(topic_name.into(), actions);
        self
    }
}

impl Default for StaticTopicActions {
    fn default() -> Self {
        Self::new(Self::all())
    }
}

impl TopicActionsProvider for StaticTopicActions {
    fn allowed_topic_actions(&self, topic_name: &str) -> Vec<TopicAction> {
        self.overrides
            .get(topic_name)
            .unwrap_or(&self.default_actions)
            .clone()
    }
}
