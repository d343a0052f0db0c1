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

//! Topic overview for a Kafka console.
//!
//! [`owl::OverviewService`] lists every topic of a cluster together with its
//! partition count, replication factor, cleanup policy, on-disk size and the
//! actions the requesting principal may run on it. It combines three admin
//! requests issued through a [`kafka::KafkaAdmin`]:
//!
//! - metadata, which must succeed for every topic,
//! - log dirs, which only fill in sizes when every replica was reported,
//! - topic configs, which only fill in the cleanup policy when readable.
//!
//! # Examples
//!
//! ```rust,ignore
//! use owl::kafka::StaticKafkaAdmin;
//! use owl::owl::OverviewService;
//! use tokio_util::sync::CancellationToken;
//!
//! let service = OverviewService::new(StaticKafkaAdmin::from_file("cluster.yaml")?);
//! for topic in service.get_topics_overview(&CancellationToken::new()).await? {
//!     println!("{} {}", topic.topic_name(), topic.log_dir_size());
//! }
//! ```

pub mod config;
pub mod kafka;
pub mod owl;

pub use crate::config::OwlConfig;
