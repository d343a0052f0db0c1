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

//! Overview service and its builder
//!
//! The service holds the capabilities it works with: a [`KafkaAdmin`] to query
//! the cluster, a [`TopicActionsProvider`](super::TopicActionsProvider) for the allowed actions of the
//! requesting principal, and optionally the [`Dispatch`] all of its diagnostics
//! are sent to.

use std::collections::HashSet;

use cheetah_string::CheetahString;
use owl_error::OwlError;
use owl_error::OwlResult;
use tracing::error;
use tracing::Dispatch;

use super::topic_actions::AllowAllTopicActions;
use crate::kafka::KafkaAdmin;
use crate::kafka::MetadataSnapshot;

/// Builder for [`OverviewService`]
///
/// # Examples
///
/// ```rust,ignore
/// use owl::kafka::StaticKafkaAdmin;
/// use owl::owl::OverviewServiceBuilder;
/// use owl::owl::StaticTopicActions;
///
/// let service = OverviewServiceBuilder::new(StaticKafkaAdmin::from_file("cluster.yaml")?)
///     .topic_actions(StaticTopicActions::default())
///     .build();
/// ```
#[derive(Debug)]
pub struct OverviewServiceBuilder<A, P = AllowAllTopicActions> {
    kafka_admin: A,
    topic_actions: P,
    dispatch: Option<Dispatch>,
}

impl<A> OverviewServiceBuilder<A, AllowAllTopicActions> {
    #[inline]
    pub fn new(kafka_admin: A) -> Self {
        Self {
            kafka_admin,
            topic_actions: AllowAllTopicActions,
            dispatch: None,
        }
    }
}

impl<A, P> OverviewServiceBuilder<A, P> {
    /// Set the provider of allowed actions per topic
    #[inline]
    pub fn topic_actions<Q>(self, topic_actions: Q) -> OverviewServiceBuilder<A, Q> {
        OverviewServiceBuilder {
            kafka_admin: self.kafka_admin,
            topic_actions,
            dispatch: self.dispatch,
        }
    }

    /// Send diagnostics to `dispatch` instead of the default subscriber
    #[inline]
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn build(self) -> OverviewService<A, P> {
        OverviewService {
            kafka_admin: self.kafka_admin,
            topic_actions: self.topic_actions,
            dispatch: self.dispatch,
        }
    }
}

/// Read-only view on the topics of one cluster
#[derive(Debug)]
pub struct OverviewService<A, P = AllowAllTopicActions> {
    kafka_admin: A,
    topic_actions: P,
    dispatch: Option<Dispatch>,
}

impl<A> OverviewService<A, AllowAllTopicActions> {
    #[inline]
    pub fn new(kafka_admin: A) -> Self {
        OverviewServiceBuilder::new(kafka_admin).build()
    }
}

impl<A, P> OverviewService<A, P> {
    #[inline]
    pub fn kafka_admin(&self) -> &A {
        &self.kafka_admin
    }

    #[inline]
    pub fn topic_actions(&self) -> &P {
        &self.topic_actions
    }

    #[inline]
    pub(crate) fn dispatch(&self) -> Option<&Dispatch> {
        self.dispatch.as_ref()
    }
}

impl<A, P> OverviewService<A, P>
where
    A: KafkaAdmin,
{
    /// Fetch cluster metadata, failing on the first topic that carries an error
    ///
    /// An error on a single topic fails the whole call.
    pub async fn fetch_metadata(&self, topics: Option<&[CheetahString]>) -> OwlResult<MetadataSnapshot> {
        let metadata = self.kafka_admin.fetch_metadata(topics).await?;

        let mut seen = HashSet::with_capacity(metadata.topics.len());
        for topic in &metadata.topics {
            if let Some(err) = topic.error() {
                error!(
                    topic_name = %topic.topic,
                    error = %err,
                    "failed to get topic metadata while listing topics"
                );
                return Err(OwlError::topic_metadata(topic.topic.to_string(), err));
            }
            if topic.topic.as_str().is_empty() {
                return Err(OwlError::metadata_inconsistent("topic with an empty name"));
            }
            if !seen.insert(topic.topic.as_str()) {
                return Err(OwlError::metadata_inconsistent(format!(
                    "topic '{}' is listed more than once",
                    topic.topic
                )));
            }
        }
        Ok(metadata)
    }
}
