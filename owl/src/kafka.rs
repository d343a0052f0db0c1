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

//! Admin-level view on a Kafka cluster
//!
//! [`KafkaAdmin`] is the seam between the overview logic and the wire. The
//! data types mirror the Metadata, DescribeLogDirs and DescribeConfigs
//! responses closely enough to be recorded in a [`ClusterSnapshot`].

mod admin;
mod log_dirs;
mod metadata;
mod static_admin;
mod topic_config;

pub use self::admin::KafkaAdmin;
pub use self::admin::KafkaAdminLocal;
pub use self::log_dirs::BrokerLogDirs;
pub use self::log_dirs::LogDir;
pub use self::log_dirs::LogDirPartition;
pub use self::log_dirs::LogDirReport;
pub use self::log_dirs::LogDirTopic;
pub use self::metadata::BrokerMetadata;
pub use self::metadata::MetadataSnapshot;
pub use self::metadata::PartitionMetadata;
pub use self::metadata::TopicMetadata;
pub use self::static_admin::ClusterSnapshot;
pub use self::static_admin::StaticKafkaAdmin;
pub use self::topic_config::ConfigEntry;
pub use self::topic_config::ConfigLookup;
pub use self::topic_config::ConfigSource;
pub use self::topic_config::TopicConfigDescription;
pub use self::topic_config::TopicConfigs;
pub use self::topic_config::CLEANUP_POLICY;
