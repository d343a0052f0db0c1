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

//! In-process [`KafkaAdmin`] answering from a recorded cluster snapshot
//!
//! A snapshot file holds the answers of the three admin requests:
//!
//! ```yaml
//! metadata:
//!   brokers: [{ nodeId: 1, host: kafka-1, port: 9092 }]
//!   topics:
//!     - topic: orders
//!       partitions: [{ partition: 0, leader: 1, replicas: [1] }]
//! logDirs:          # omitted: DescribeLogDirs fails
//!   brokers:
//!     - brokerId: 1
//!       dirs: [{ path: /data, topics: [{ topic: orders, partitions: [{ partition: 0, size: 42 }] }] }]
//! topicConfigs:     # omitted: DescribeConfigs is denied
//!   - topic: orders
//!     entries: [{ name: cleanup.policy, value: delete }]
//! ```

use std::path::Path;

use cheetah_string::CheetahString;
use owl_error::KafkaError;
use owl_error::OwlError;
use owl_error::OwlResult;
use serde::Deserialize;
use serde::Serialize;

use crate::kafka::admin::KafkaAdmin;
use crate::kafka::log_dirs::LogDirReport;
use crate::kafka::metadata::MetadataSnapshot;
use crate::kafka::metadata::TopicMetadata;
use crate::kafka::topic_config::TopicConfigDescription;
use crate::kafka::topic_config::TopicConfigs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSnapshot {
    pub metadata: MetadataSnapshot,
    #[serde(default)]
    pub log_dirs: Option<LogDirReport>,
    #[serde(default)]
    pub topic_configs: Option<Vec<TopicConfigDescription>>,
}

impl ClusterSnapshot {
    /// Read a snapshot from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> OwlResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Err(OwlError::illegal_argument(format!(
                "unsupported snapshot file '{}', expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticKafkaAdmin {
    snapshot: ClusterSnapshot,
}

impl StaticKafkaAdmin {
    pub fn new(snapshot: ClusterSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_file(path: impl AsRef<Path>) -> OwlResult<Self> {
        ClusterSnapshot::from_file(path).map(Self::new)
    }

    #[inline]
    pub fn snapshot(&self) -> &ClusterSnapshot {
        &self.snapshot
    }

    fn topic_metadata(&self, name: &CheetahString) -> TopicMetadata {
        self.snapshot
            .metadata
            .topics
            .iter()
            .find(|topic| &topic.topic == name)
            .cloned()
            .unwrap_or_else(|| TopicMetadata {
                topic: name.clone(),
                is_internal: false,
                error_code: KafkaError::UNKNOWN_TOPIC_OR_PARTITION.code(),
                partitions: vec![],
            })
    }

    fn topic_config(&self, descriptions: &[TopicConfigDescription], name: &CheetahString) -> TopicConfigDescription {
        descriptions
            .iter()
            .find(|description| &description.topic == name)
            .cloned()
            .unwrap_or_else(|| TopicConfigDescription {
                topic: name.clone(),
                error_code: KafkaError::UNKNOWN_TOPIC_OR_PARTITION.code(),
                entries: vec![],
            })
    }
}

impl KafkaAdmin for StaticKafkaAdmin {
    async fn fetch_metadata(&self, topics: Option<&[CheetahString]>) -> OwlResult<MetadataSnapshot> {
        let Some(filter) = topics else {
            return Ok(self.snapshot.metadata.clone());
        };
        Ok(MetadataSnapshot {
            brokers: self.snapshot.metadata.brokers.clone(),
            controller_id: self.snapshot.metadata.controller_id,
            topics: filter.iter().map(|name| self.topic_metadata(name)).collect(),
        })
    }

    async fn fetch_log_dirs(&self, topics: Option<&[CheetahString]>) -> OwlResult<LogDirReport> {
        let mut report = self
            .snapshot
            .log_dirs
            .clone()
            .ok_or_else(|| OwlError::request_failed("DescribeLogDirs", "no broker returned a log dir report"))?;
        if let Some(filter) = topics {
            for dir in report.brokers.iter_mut().flat_map(|broker| broker.dirs.iter_mut()) {
                dir.topics.retain(|topic| filter.contains(&topic.topic));
            }
        }
        Ok(report)
    }

    async fn fetch_topic_configs(&self, topics: &[CheetahString], config_keys: &[&str]) -> OwlResult<TopicConfigs> {
        let descriptions = self
            .snapshot
            .topic_configs
            .as_deref()
            .ok_or(OwlError::Kafka(KafkaError::CLUSTER_AUTHORIZATION_FAILED))?;
        let configs = topics
            .iter()
            .map(|name| {
                let mut description = self.topic_config(descriptions, name);
                if !config_keys.is_empty() {
                    description
                        .entries
                        .retain(|entry| config_keys.contains(&entry.name.as_str()));
                }
                (name.clone(), description)
            })
            .collect();
        Ok(configs)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::kafka::topic_config::CLEANUP_POLICY;

    const SNAPSHOT: &str = r#"
metadata:
  brokers:
    - { nodeId: 1, host: kafka-1, port: 9092 }
  controllerId: 1
  topics:
    - topic: orders
      partitions:
        - { partition: 0, leader: 1, replicas: [1], isr: [1] }
    - topic: audit
      partitions:
        - { partition: 0, leader: 1, replicas: [1], isr: [1] }
logDirs:
  brokers:
    - brokerId: 1
      dirs:
        - path: /data
          topics:
            - topic: orders
              partitions: [{ partition: 0, size: 100 }]
            - topic: audit
              partitions: [{ partition: 0, size: 7 }]
topicConfigs:
  - topic: orders
    entries:
      - { name: cleanup.policy, value: delete, source: DEFAULT_CONFIG }
      - { name: retention.ms, value: "604800000" }
"#;

    fn admin() -> StaticKafkaAdmin {
        StaticKafkaAdmin::new(serde_yaml::from_str(SNAPSHOT).unwrap())
    }

    #[tokio::test]
    async fn metadata_filter_marks_unknown_topics() {
        let admin = admin();
        let filter = [CheetahString::from_static_str("orders"), CheetahString::from_static_str("nope")];
        let metadata = admin.fetch_metadata(Some(&filter)).await.unwrap();

        assert_eq!(metadata.topics.len(), 2);
        assert!(metadata.topics[0].error().is_none());
        assert_eq!(metadata.topics[1].error(), Some(KafkaError::UNKNOWN_TOPIC_OR_PARTITION));
        assert_eq!(admin.fetch_metadata(None).await.unwrap(), admin.snapshot().metadata);
    }

    #[tokio::test]
    async fn log_dirs_filter_and_absence() {
        let admin = admin();
        let filter = [CheetahString::from_static_str("audit")];
        let report = admin.fetch_log_dirs(Some(&filter)).await.unwrap();
        let topics = &report.brokers[0].dirs[0].topics;
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].topic.as_str(), "audit");

        let mut snapshot = admin.snapshot().clone();
        snapshot.log_dirs = None;
        let err = StaticKafkaAdmin::new(snapshot).fetch_log_dirs(None).await.unwrap_err();
        assert!(matches!(err, OwlError::Network(_)));
    }

    #[tokio::test]
    async fn topic_configs_select_keys() {
        let admin = admin();
        let topics = [CheetahString::from_static_str("orders"), CheetahString::from_static_str("audit")];
        let configs = admin.fetch_topic_configs(&topics, &[CLEANUP_POLICY]).await.unwrap();

        let orders = &configs[&topics[0]];
        assert_eq!(orders.entries.len(), 1);
        assert_eq!(orders.lookup(CLEANUP_POLICY).value(), Some("delete"));
        assert_eq!(configs[&topics[1]].error(), Some(KafkaError::UNKNOWN_TOPIC_OR_PARTITION));
    }

    #[tokio::test]
    async fn missing_configs_are_denied() {
        let mut snapshot = admin().snapshot().clone();
        snapshot.topic_configs = None;
        let err = StaticKafkaAdmin::new(snapshot)
            .fetch_topic_configs(&[CheetahString::from_static_str("orders")], &[CLEANUP_POLICY])
            .await
            .unwrap_err();
        assert!(err.is_authorization_failure());
    }

    #[test]
    fn snapshot_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let snapshot = ClusterSnapshot::from_file(file.path()).unwrap();
        assert_eq!(snapshot.metadata.topics.len(), 2);

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(serde_json::to_string(&snapshot).unwrap().as_bytes()).unwrap();
        assert_eq!(ClusterSnapshot::from_file(file.path()).unwrap(), snapshot);

        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            ClusterSnapshot::from_file(file.path()),
            Err(OwlError::IllegalArgument(_))
        ));
    }
}
