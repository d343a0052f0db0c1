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

use std::fmt;
use std::str::FromStr;

use owl_error::OwlError;
use owl_error::OwlResult;

/// Initializes the process-wide logger.
///
/// The level comes from `level` when given, otherwise from the `RUST_LOG`
/// environment variable, defaulting to "INFO". The output includes thread
/// names, log levels and line numbers, and is written to stderr so stdout
/// stays free for command output.
pub fn init_logger(level: Option<&str>) -> OwlResult<()> {
    let level = match level {
        Some(level) => level.to_string(),
        None => std::env::var("RUST_LOG").unwrap_or(String::from("INFO")),
    };
    let level = Level::from_str(&level)?;
    tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_level(true)
        .with_line_number(true)
        .with_max_level(level.as_tracing())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| OwlError::Internal(format!("failed to install logger: {e}")))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Level(&'static str);

impl Level {
    /// Constant representing the ERROR log level.
    pub const ERROR: Level = Level("ERROR");

    /// Constant representing the WARN log level.
    pub const WARN: Level = Level("WARN");

    /// Constant representing the INFO log level.
    pub const INFO: Level = Level("INFO");

    /// Constant representing the DEBUG log level.
    pub const DEBUG: Level = Level("DEBUG");

    /// Constant representing the TRACE log level.
    pub const TRACE: Level = Level("TRACE");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn as_tracing(&self) -> tracing::Level {
        match *self {
            Level::ERROR => tracing::Level::ERROR,
            Level::WARN => tracing::Level::WARN,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::TRACE => tracing::Level::TRACE,
            _ => tracing::Level::INFO,
        }
    }
}

impl FromStr for Level {
    type Err = OwlError;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::ERROR),
            "WARN" => Ok(Level::WARN),
            "INFO" => Ok(Level::INFO),
            "DEBUG" => Ok(Level::DEBUG),
            "TRACE" => Ok(Level::TRACE),
            _ => Err(OwlError::config_invalid(
                "log_level",
                level,
                "expected one of ERROR, WARN, INFO, DEBUG, TRACE",
            )),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}
