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

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::Zsh;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::ui::output::print_error;

const BIN_NAME: &str = "owl-admin-cli";

#[derive(Parser)]
#[command(name = "owl-admin-cli")]
#[command(about = "Owl Kafka admin commands", long_about = None)]
pub struct OwlCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script (bash, zsh, fish)"
    )]
    completion: Option<String>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl OwlCli {
    pub async fn handle(&self) -> ExitCode {
        if let Some(shell) = &self.completion {
            return match write_completion(shell, &mut std::io::stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(unsupported) => {
                    print_error(&format!("Unsupported shell: {unsupported}"));
                    eprintln!("Supported shells: bash, zsh, fish");
                    ExitCode::FAILURE
                }
            };
        }

        let Some(commands) = &self.commands else {
            print_error("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        };

        let cancel = CancellationToken::new();
        let interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, abandoning outstanding requests");
                interrupt.cancel();
            }
        });

        match commands.execute(&cancel).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                print_error(&e.to_string());
                ExitCode::FAILURE
            }
        }
    }
}

/// Write the completion script for `shell`, or hand back the unsupported name
fn write_completion<'a>(shell: &'a str, out: &mut impl std::io::Write) -> Result<(), &'a str> {
    let mut cmd = OwlCli::command();
    match shell.to_lowercase().as_str() {
        "bash" => generate(Bash, &mut cmd, BIN_NAME, out),
        "zsh" => generate(Zsh, &mut cmd, BIN_NAME, out),
        "fish" => generate(Fish, &mut cmd, BIN_NAME, out),
        _ => return Err(shell),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        OwlCli::command().debug_assert();
    }

    #[test]
    fn parses_topic_overview() {
        let cli = OwlCli::try_parse_from([BIN_NAME, "topic", "topicOverview", "-s", "cluster.yaml", "-f", "json"]).unwrap();
        assert!(matches!(cli.commands, Some(Commands::Topic(_))));
        assert!(OwlCli::try_parse_from([BIN_NAME, "topic", "topicList"]).is_err());
    }

    #[test]
    fn completion_scripts() {
        let mut out = Vec::new();
        write_completion("BASH", &mut out).unwrap();
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("topicOverview"));

        assert_eq!(write_completion("powershell", &mut Vec::new()), Err("powershell"));
    }

    #[tokio::test]
    async fn no_command_fails() {
        let cli = OwlCli::try_parse_from([BIN_NAME]).unwrap();
        assert_eq!(cli.handle().await, ExitCode::FAILURE);
    }
}
