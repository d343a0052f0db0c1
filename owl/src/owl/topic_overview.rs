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

//! Topic overview: one row per topic, merged from metadata, log dirs and configs

use cheetah_string::CheetahString;
use owl_error::OwlError;
use owl_error::OwlResult;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::info_span;
use tracing::instrument::WithSubscriber;
use tracing::warn;
use tracing::Instrument;

use super::logdirs::LogDirsByTopic;
use super::service::OverviewService;
use super::topic_actions::TopicAction;
use super::topic_actions::TopicActionsProvider;
use crate::kafka::KafkaAdmin;
use crate::kafka::MetadataSnapshot;
use crate::kafka::TopicConfigs;
use crate::kafka::TopicMetadata;
use crate::kafka::CLEANUP_POLICY;

/// Cleanup policy of a topic whose config could not be read
pub const CLEANUP_POLICY_UNKNOWN: &str = "N/A";

/// Log dir size of a topic whose replicas were not all reported
pub const LOG_DIR_SIZE_UNKNOWN: i64 = -1;

/// All information we get when listing topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicOverview {
    topic_name: CheetahString,
    is_internal: bool,
    partition_count: usize,
    replication_factor: usize,
    cleanup_policy: String,
    log_dir_size: i64,
    /// What actions the requesting principal is allowed to run on this topic
    allowed_actions: Vec<TopicAction>,
}

impl TopicOverview {
    #[inline]
    pub fn topic_name(&self) -> &CheetahString {
        &self.topic_name
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.is_internal
    }

    #[inline]
    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    #[inline]
    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    #[inline]
    pub fn cleanup_policy(&self) -> &str {
        &self.cleanup_policy
    }

    #[inline]
    pub fn log_dir_size(&self) -> i64 {
        self.log_dir_size
    }

    #[inline]
    pub fn allowed_actions(&self) -> &[TopicAction] {
        &self.allowed_actions
    }
}

/// Replica-set size of the first partition
///
/// All partitions of a topic are assumed to be replicated equally. During a
/// reassignment they may temporarily differ; see [`replica_set_sizes`]. A
/// topic without partitions has a replication factor of `0`.
pub fn replication_factor(topic: &TopicMetadata) -> usize {
    topic.partitions.first().map_or(0, |p| p.replicas.len())
}

/// Smallest and largest replica-set size over all partitions
pub fn replica_set_sizes(topic: &TopicMetadata) -> Option<(usize, usize)> {
    let sizes = topic.partitions.iter().map(|p| p.replicas.len());
    let min = sizes.clone().min()?;
    let max = sizes.max()?;
    Some((min, max))
}

/// Join the sub-results into one row per metadata topic, sorted by topic name
///
/// `None` for `log_dirs` or `configs` means the respective fetch failed; every
/// topic then gets the matching sentinel value.
pub fn merge_topics_overview<P>(
    metadata: &MetadataSnapshot,
    log_dirs: Option<&LogDirsByTopic>,
    configs: Option<&TopicConfigs>,
    topic_actions: &P,
) -> Vec<TopicOverview>
where
    P: TopicActionsProvider + ?Sized,
{
    let mut res: Vec<TopicOverview> = metadata
        .topics
        .iter()
        .map(|topic| {
            let log_dir_size = log_dirs
                .and_then(|log_dirs| log_dirs.size_of(topic))
                .unwrap_or(LOG_DIR_SIZE_UNKNOWN);

            let cleanup_policy = configs
                .and_then(|configs| configs.get(&topic.topic))
                .and_then(|description| description.lookup(CLEANUP_POLICY).value())
                .unwrap_or(CLEANUP_POLICY_UNKNOWN);

            TopicOverview {
                topic_name: topic.topic.clone(),
                is_internal: topic.is_internal,
                partition_count: topic.partitions.len(),
                replication_factor: replication_factor(topic),
                cleanup_policy: cleanup_policy.to_string(),
                log_dir_size,
                allowed_actions: topic_actions.allowed_topic_actions(topic.topic.as_str()),
            }
        })
        .collect();

    res.sort_by(|a, b| a.topic_name.as_str().cmp(b.topic_name.as_str()));
    res
}

impl<A, P> OverviewService<A, P>
where
    A: KafkaAdmin,
    P: TopicActionsProvider,
{
    /// Return a [`TopicOverview`] for every topic in the cluster
    ///
    /// Only a metadata failure fails the call. Failed log dir or config fetches
    /// are logged and leave their sentinel values in place. If `cancel` fires
    /// before the overview is complete, outstanding requests are dropped and
    /// [`OwlError::Cancelled`] is returned.
    pub async fn get_topics_overview(&self, cancel: &CancellationToken) -> OwlResult<Vec<TopicOverview>> {
        let overview = async {
            let span = info_span!("overview");
            async {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        debug!("topics overview cancelled");
                        Err(OwlError::cancelled("topics overview"))
                    }
                    result = self.topics_overview() => result,
                }
            }
            .instrument(span)
            .await
        };

        match self.dispatch() {
            Some(dispatch) => overview.with_subscriber(dispatch.clone()).await,
            None => overview.await,
        }
    }

    async fn topics_overview(&self) -> OwlResult<Vec<TopicOverview>> {
        let metadata = self.fetch_metadata(None).await?;
        if metadata.topics.is_empty() {
            return Ok(Vec::new());
        }
        let topic_names: Vec<CheetahString> = metadata.topics.iter().map(|topic| topic.topic.clone()).collect();

        let (log_dirs, configs) = futures::future::join(
            self.log_dirs_by_topic(Some(&topic_names)),
            self.get_topics_configs(&topic_names, &[CLEANUP_POLICY]),
        )
        .await;

        let log_dirs = match log_dirs {
            Ok(log_dirs) => Some(log_dirs),
            Err(e) => {
                warn!(error = %e, "failed to fetch log dirs, topic sizes are unknown");
                None
            }
        };
        let configs = match configs {
            Ok(configs) => configs,
            Err(e) => {
                warn!(error = %e, "failed to fetch topic configs to return cleanup.policy");
                None
            }
        };

        let overview = merge_topics_overview(&metadata, log_dirs.as_ref(), configs.as_ref(), self.topic_actions());

        let uneven = metadata
            .topics
            .iter()
            .filter(|topic| replica_set_sizes(topic).is_some_and(|(min, max)| min != max))
            .count();
        let unknown_sizes = overview
            .iter()
            .filter(|topic| topic.log_dir_size == LOG_DIR_SIZE_UNKNOWN)
            .count();
        debug!(
            topics = overview.len(),
            unknown_sizes,
            uneven_replication = uneven,
            "built topics overview"
        );
        Ok(overview)
    }
}
