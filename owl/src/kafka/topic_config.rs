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

//! Topic configuration as returned by DescribeConfigs

use std::collections::HashMap;

use cheetah_string::CheetahString;
use owl_error::KafkaError;
use serde::Deserialize;
use serde::Serialize;

/// Retention strategy of a topic: `delete`, `compact` or both
pub const CLEANUP_POLICY: &str = "cleanup.policy";

/// Config descriptions keyed by topic name
pub type TopicConfigs = HashMap<CheetahString, TopicConfigDescription>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicConfigDescription {
    pub topic: CheetahString,
    #[serde(default)]
    pub error_code: i16,
    #[serde(default)]
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub name: String,
    /// `None` when the cluster withholds the value, e.g. for sensitive entries
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub source: ConfigSource,
    #[serde(default)]
    pub is_sensitive: bool,
    #[serde(default)]
    pub is_read_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigSource {
    DynamicTopicConfig,
    DynamicBrokerLoggerConfig,
    DynamicBrokerConfig,
    DynamicDefaultBrokerConfig,
    StaticBrokerConfig,
    DefaultConfig,
    #[default]
    Unknown,
}

/// Outcome of looking up a single key in a [`TopicConfigDescription`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLookup<'a> {
    Value(&'a str),
    /// The entry exists but the cluster did not return its value
    Withheld,
    Missing,
}

impl<'a> ConfigLookup<'a> {
    #[inline]
    pub fn value(self) -> Option<&'a str> {
        match self {
            ConfigLookup::Value(value) => Some(value),
            ConfigLookup::Withheld | ConfigLookup::Missing => None,
        }
    }
}

impl TopicConfigDescription {
    #[inline]
    pub fn error(&self) -> Option<KafkaError> {
        KafkaError::for_code(self.error_code)
    }

    pub fn entry(&self, name: &str) -> Option<&ConfigEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn lookup(&self, name: &str) -> ConfigLookup<'_> {
        match self.entry(name) {
            Some(ConfigEntry { value: Some(value), .. }) => ConfigLookup::Value(value),
            Some(_) => ConfigLookup::Withheld,
            None => ConfigLookup::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> TopicConfigDescription {
        TopicConfigDescription {
            topic: CheetahString::from_static_str("orders"),
            error_code: 0,
            entries: vec![
                ConfigEntry {
                    name: CLEANUP_POLICY.to_string(),
                    value: Some("compact".to_string()),
                    source: ConfigSource::DynamicTopicConfig,
                    is_sensitive: false,
                    is_read_only: false,
                },
                ConfigEntry {
                    name: "sasl.jaas.config".to_string(),
                    value: None,
                    source: ConfigSource::StaticBrokerConfig,
                    is_sensitive: true,
                    is_read_only: true,
                },
            ],
        }
    }

    #[test]
    fn lookup_is_total() {
        let description = description();
        assert_eq!(description.lookup(CLEANUP_POLICY), ConfigLookup::Value("compact"));
        assert_eq!(description.lookup("sasl.jaas.config"), ConfigLookup::Withheld);
        assert_eq!(description.lookup("retention.ms"), ConfigLookup::Missing);

        assert_eq!(description.lookup(CLEANUP_POLICY).value(), Some("compact"));
        assert_eq!(description.lookup("sasl.jaas.config").value(), None);
    }

    #[test]
    fn config_source_wire_names() {
        let source: ConfigSource = serde_json::from_str("\"DYNAMIC_TOPIC_CONFIG\"").unwrap();
        assert_eq!(source, ConfigSource::DynamicTopicConfig);
        assert_eq!(serde_json::to_string(&ConfigSource::DefaultConfig).unwrap(), "\"DEFAULT_CONFIG\"");
    }
}
