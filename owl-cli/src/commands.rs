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

mod topic_commands;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use owl::OwlConfig;
use owl_error::OwlResult;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;
use tokio_util::sync::CancellationToken;

/// A trait that defines the execution behavior for commands.
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `cancel`: fires when the user interrupts the process. Outstanding cluster requests are
    ///   abandoned and the command fails with a cancellation error.
    async fn execute(&self, cancel: &CancellationToken) -> OwlResult<()>;
}

#[derive(Debug, Parser, Clone, Default)]
pub struct CommonArgs {
    /// Owl config file
    #[arg(
        short = 'c',
        long = "config",
        required = false,
        help = "Owl config file (yaml, json or toml), eg: 'demos/owl.yaml'"
    )]
    pub config: Option<PathBuf>,

    /// Cluster snapshot file
    #[arg(
        short = 's',
        long = "snapshot",
        required = false,
        help = "Cluster snapshot file (yaml or json), overrides 'snapshot' of the config file"
    )]
    pub snapshot: Option<PathBuf>,

    #[arg(
        long = "log-level",
        required = false,
        help = "Log level (ERROR, WARN, INFO, DEBUG, TRACE), overrides 'log_level' of the config file"
    )]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// The config file, if any, with command line flags applied on top
    pub fn load_config(&self) -> OwlResult<OwlConfig> {
        let mut config = match &self.config {
            Some(path) => OwlConfig::from_file(path)?,
            None => OwlConfig::default(),
        };
        if let Some(snapshot) = &self.snapshot {
            config.snapshot = Some(snapshot.clone());
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = Some(log_level.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Topic commands")]
    Topic(topic_commands::TopicCommands),

    #[command(about = "Category commands show")]
    Show(ClassificationTablePrint),
}

impl CommandExecute for Commands {
    async fn execute(&self, cancel: &CancellationToken) -> OwlResult<()> {
        match self {
            Commands::Topic(value) => value.execute(cancel).await,
            Commands::Show(value) => value.execute(cancel).await,
        }
    }
}

// ================for commands table print================
#[derive(Tabled, Clone)]
struct Command {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Parser)]
pub(crate) struct ClassificationTablePrint;

impl ClassificationTablePrint {
    fn commands() -> Vec<Command> {
        vec![Command {
            category: "Topic",
            command: "topicOverview",
            remark: "List all topics with size, cleanup policy and allowed actions.",
        }]
    }
}

impl CommandExecute for ClassificationTablePrint {
    async fn execute(&self, _cancel: &CancellationToken) -> OwlResult<()> {
        let mut table = Table::new(Self::commands());
        table.with(Style::extended());
        println!("{table}");
        Ok(())
    }
}
