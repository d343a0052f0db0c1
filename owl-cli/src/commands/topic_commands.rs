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

mod topic_overview_sub_command;

use clap::Subcommand;
use owl_error::OwlResult;
use tokio_util::sync::CancellationToken;

use crate::commands::CommandExecute;

#[derive(Subcommand)]
pub enum TopicCommands {
    #[command(
        name = "topicOverview",
        about = "List all topics with size, cleanup policy and allowed actions",
        long_about = r#"List every topic of the cluster, sorted by name, with its partition count,
replication factor, cleanup policy, total size on disk and the actions the configured principal
may run on it. Sizes of topics with replicas on unreachable brokers and policies of topics whose
config cannot be read are shown as unknown instead of failing the command."#
    )]
    TopicOverview(topic_overview_sub_command::TopicOverviewSubCommand),
}

impl CommandExecute for TopicCommands {
    async fn execute(&self, cancel: &CancellationToken) -> OwlResult<()> {
        match self {
            TopicCommands::TopicOverview(cmd) => cmd.execute(cancel).await,
        }
    }
}
