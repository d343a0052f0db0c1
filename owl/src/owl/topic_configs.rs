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
use tracing::debug;
use tracing::warn;

use super::service::OverviewService;
use crate::kafka::KafkaAdmin;
use crate::kafka::TopicConfigs;

impl<A, P> OverviewService<A, P>
where
    A: KafkaAdmin,
{
    /// Describe the given config keys of the given topics
    ///
    /// Returns `Ok(None)` when the cluster denies the request for lack of
    /// permissions, which callers treat as "no config known for any topic".
    /// Topics whose description carries an error code are left out.
    pub async fn get_topics_configs(
        &self,
        topics: &[CheetahString],
        config_keys: &[&str],
    ) -> OwlResult<Option<TopicConfigs>> {
        let mut configs = match self.kafka_admin().fetch_topic_configs(topics, config_keys).await {
            Ok(configs) => configs,
            Err(e) if e.is_authorization_failure() => {
                warn!(error = %e, "not authorized to describe topic configs");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let before = configs.len();
        configs.retain(|_, description| description.error().is_none());
        if configs.len() < before {
            debug!(
                failed_topics = before - configs.len(),
                "dropped topic config descriptions carrying an error"
            );
        }
        Ok(Some(configs))
    }
}
