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

//! Owl admin command line
//!
//! ```bash
//! owl-admin-cli topic topicOverview -s demos/cluster.yaml -f json
//! ```

// CLI presentation layer
pub mod cli {
    //! Output formatting for command results. Commands fetch through
    //! [`owl::owl::OverviewService`] and render their results with
    //! [`formatters::OutputFormat`].

    pub mod formatters;
}

pub mod ui;

pub(crate) mod commands;

// CLI entry point
pub mod owl_cli;
