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

mod logdirs;
mod service;
mod topic_actions;
mod topic_configs;
mod topic_overview;

pub use self::logdirs::LogDirsByTopic;
pub use self::logdirs::TopicLogDirSummary;
pub use self::service::OverviewService;
pub use self::service::OverviewServiceBuilder;
pub use self::topic_actions::AllowAllTopicActions;
pub use self::topic_actions::StaticTopicActions;
pub use self::topic_actions::TopicAction;
pub use self::topic_actions::TopicActionsProvider;
pub use self::topic_overview::merge_topics_overview;
pub use self::topic_overview::replica_set_sizes;
pub use self::topic_overview::replication_factor;
pub use self::topic_overview::TopicOverview;
pub use self::topic_overview::CLEANUP_POLICY_UNKNOWN;
pub use self::topic_overview::LOG_DIR_SIZE_UNKNOWN;
