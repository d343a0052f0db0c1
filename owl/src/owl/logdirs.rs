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

//! On-disk size per topic, summed over the log dir reports of all brokers

use std::collections::HashMap;
use std::collections::HashSet;

use cheetah_string::CheetahString;
use owl_error::OwlResult;
use tracing::debug;
use tracing::warn;

use super::service::OverviewService;
use crate::kafka::KafkaAdmin;
use crate::kafka::LogDirReport;
use crate::kafka::TopicMetadata;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicLogDirSummary {
    pub total_size_bytes: i64,
    /// `(broker id, partition)` of every replica found in a readable log dir
    pub reported_replicas: HashSet<(i32, i32)>,
    /// Replicas reported with a negative size
    pub invalid_replica_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct LogDirsByTopic {
    pub topic_log_dirs: HashMap<CheetahString, TopicLogDirSummary>,
    /// Brokers that answered with every log dir readable
    pub complete_brokers: HashSet<i32>,
}

impl LogDirsByTopic {
    pub fn from_report(report: &LogDirReport) -> Self {
        let mut by_topic = LogDirsByTopic::default();
        for broker in &report.brokers {
            if broker.is_complete() {
                by_topic.complete_brokers.insert(broker.broker_id);
            } else {
                warn!(
                    broker_id = broker.broker_id,
                    error = broker.error.as_deref().unwrap_or("log dir error"),
                    "incomplete log dir report, sizes of topics with replicas on this broker are unknown"
                );
            }

            let readable_dirs = broker.dirs.iter().filter(|dir| dir.error().is_none());
            for topic in readable_dirs.flat_map(|dir| dir.topics.iter()) {
                let summary = by_topic.topic_log_dirs.entry(topic.topic.clone()).or_default();
                for partition in &topic.partitions {
                    summary.reported_replicas.insert((broker.broker_id, partition.partition));
                    if partition.size < 0 {
                        summary.invalid_replica_count += 1;
                    } else {
                        summary.total_size_bytes = summary.total_size_bytes.saturating_add(partition.size);
                    }
                }
            }
        }
        by_topic
    }

    /// Total bytes of `topic`, or `None` unless every replica was accounted for
    ///
    /// Every replica assigned in `topic` must have been reported by its broker,
    /// and that broker's report must be complete.
    pub fn size_of(&self, topic: &TopicMetadata) -> Option<i64> {
        let summary = self.topic_log_dirs.get(&topic.topic)?;
        if summary.invalid_replica_count > 0 {
            return None;
        }
        let all_reported = topic.partitions.iter().all(|partition| {
            partition.replicas.iter().all(|&broker_id| {
                self.complete_brokers.contains(&broker_id)
                    && summary.reported_replicas.contains(&(broker_id, partition.partition))
            })
        });
        all_reported.then_some(summary.total_size_bytes)
    }
}

impl<A, P> OverviewService<A, P>
where
    A: KafkaAdmin,
{
    /// Describe the log dirs of all brokers and sum them up per topic
    ///
    /// Fails only if the request as a whole fails; brokers that did not answer
    /// are left out of [`LogDirsByTopic::complete_brokers`].
    pub async fn log_dirs_by_topic(&self, topics: Option<&[CheetahString]>) -> OwlResult<LogDirsByTopic> {
        let report = self.kafka_admin().fetch_log_dirs(topics).await?;
        let by_topic = LogDirsByTopic::from_report(&report);
        debug!(
            brokers = report.brokers.len(),
            complete_brokers = by_topic.complete_brokers.len(),
            topics = by_topic.topic_log_dirs.len(),
            "aggregated log dir sizes"
        );
        Ok(by_topic)
    }
}
