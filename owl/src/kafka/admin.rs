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

use cheetah_string::CheetahString;
use owl_error::OwlResult;

use crate::kafka::log_dirs::LogDirReport;
use crate::kafka::metadata::MetadataSnapshot;
use crate::kafka::topic_config::TopicConfigs;

/// Administrative read access to a Kafka cluster
///
/// Implementations own connection handling, retries and timeouts. A `None`
/// topic filter means all topics.
#[trait_variant::make(KafkaAdmin: Send)]
pub trait KafkaAdminLocal: Sync {
    /// Topic and partition metadata, including per-topic error codes
    async fn fetch_metadata(&self, topics: Option<&[CheetahString]>) -> OwlResult<MetadataSnapshot>;

    /// Log directory report of every broker in the cluster
    async fn fetch_log_dirs(&self, topics: Option<&[CheetahString]>) -> OwlResult<LogDirReport>;

    /// The requested config entries of the given topics
    async fn fetch_topic_configs(&self, topics: &[CheetahString], config_keys: &[&str]) -> OwlResult<TopicConfigs>;
}
