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

//! Cluster metadata as returned by a Metadata request

use cheetah_string::CheetahString;
use owl_error::KafkaError;
use serde::Deserialize;
use serde::Serialize;

/// Point-in-time metadata of the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSnapshot {
    #[serde(default)]
    pub brokers: Vec<BrokerMetadata>,
    #[serde(default = "no_controller")]
    pub controller_id: i32,
    #[serde(default)]
    pub topics: Vec<TopicMetadata>,
}

fn no_controller() -> i32 {
    -1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerMetadata {
    pub node_id: i32,
    pub host: String,
    pub port: i32,
    #[serde(default)]
    pub rack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicMetadata {
    pub topic: CheetahString,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub error_code: i16,
    #[serde(default)]
    pub partitions: Vec<PartitionMetadata>,
}

impl TopicMetadata {
    /// The error the cluster reported for this topic, if any
    #[inline]
    pub fn error(&self) -> Option<KafkaError> {
        KafkaError::for_code(self.error_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionMetadata {
    pub partition: i32,
    #[serde(default = "no_leader")]
    pub leader: i32,
    #[serde(default)]
    pub replicas: Vec<i32>,
    #[serde(default)]
    pub isr: Vec<i32>,
    #[serde(default)]
    pub error_code: i16,
}

fn no_leader() -> i32 {
    -1
}
