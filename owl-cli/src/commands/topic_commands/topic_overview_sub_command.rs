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

use clap::Parser;
use owl::kafka::StaticKafkaAdmin;
use owl::owl::OverviewServiceBuilder;
use owl::owl::TopicOverview;
use owl::owl::LOG_DIR_SIZE_UNKNOWN;
use owl::OwlConfig;
use owl_error::OwlResult;
use tabled::Tabled;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::formatters::format_size;
use crate::cli::formatters::render_table;
use crate::cli::formatters::OutputFormat;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::ui::output::format_count;
use crate::ui::output::print_empty_result;
use crate::ui::output::print_info;
use crate::ui::output::print_warning;

#[derive(Debug, Clone, Parser)]
pub struct TopicOverviewSubCommand {
    /// Common arguments
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    format: OutputFormat,
}

#[derive(Tabled)]
struct TopicOverviewRow {
    #[tabled(rename = "Topic")]
    topic: String,

    #[tabled(rename = "Internal")]
    internal: bool,

    #[tabled(rename = "Partitions")]
    partitions: usize,

    #[tabled(rename = "Replicas")]
    replicas: usize,

    #[tabled(rename = "Cleanup Policy")]
    cleanup_policy: String,

    #[tabled(rename = "Size")]
    size: String,

    #[tabled(rename = "Allowed Actions")]
    allowed_actions: String,
}

impl From<&TopicOverview> for TopicOverviewRow {
    fn from(topic: &TopicOverview) -> Self {
        TopicOverviewRow {
            topic: topic.topic_name().to_string(),
            internal: topic.is_internal(),
            partitions: topic.partition_count(),
            replicas: topic.replication_factor(),
            cleanup_policy: topic.cleanup_policy().to_string(),
            size: format_size(topic.log_dir_size()),
            allowed_actions: topic
                .allowed_actions()
                .iter()
                .map(|action| action.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl TopicOverviewSubCommand {
    async fn topics_overview(&self, config: &OwlConfig, cancel: &CancellationToken) -> OwlResult<Vec<TopicOverview>> {
        let snapshot = config.snapshot_path()?;
        debug!(snapshot = %snapshot.display(), "loading cluster snapshot");
        let admin = StaticKafkaAdmin::from_file(snapshot)?;
        let service = OverviewServiceBuilder::new(admin)
            .topic_actions(config.topic_actions.clone())
            .build();
        service.get_topics_overview(cancel).await
    }

    fn render(&self, overview: &[TopicOverview]) -> OwlResult<String> {
        match self.format.document(overview)? {
            Some(document) => Ok(document),
            None => Ok(render_table(overview.iter().map(TopicOverviewRow::from))),
        }
    }
}

impl CommandExecute for TopicOverviewSubCommand {
    async fn execute(&self, cancel: &CancellationToken) -> OwlResult<()> {
        let config = self.common_args.load_config()?;
        owl_common::log::init_logger(config.log_level.as_deref())?;

        let overview = self.topics_overview(&config, cancel).await?;
        if self.format != OutputFormat::Table {
            println!("{}", self.render(&overview)?);
            return Ok(());
        }

        if overview.is_empty() {
            print_empty_result("topics");
            return Ok(());
        }
        println!("{}", self.render(&overview)?);
        print_info(&format_count(overview.len(), "topic", "topics"));

        let unknown_sizes = overview
            .iter()
            .filter(|topic| topic.log_dir_size() == LOG_DIR_SIZE_UNKNOWN)
            .count();
        if unknown_sizes > 0 {
            print_warning(&format!(
                "size of {} unknown, not every replica was reported",
                format_count(unknown_sizes, "topic", "topics")
            ));
        }
        Ok(())
    }
}
