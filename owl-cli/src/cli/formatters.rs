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

//! Rendering of command results as a table, JSON or YAML

mod table;

use owl_error::OwlResult;
use serde::Serialize;
pub use table::format_size;
pub use table::render_table;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    /// Serialize `data` as a JSON or YAML document. Tables are built from
    /// `Tabled` rows instead, so `Table` yields `None`.
    pub fn document<T: Serialize + ?Sized>(self, data: &T) -> OwlResult<Option<String>> {
        let document = match self {
            OutputFormat::Table => return Ok(None),
            OutputFormat::Json => serde_json::to_string_pretty(data)?,
            OutputFormat::Yaml => serde_yaml::to_string(data)?,
        };
        Ok(Some(document))
    }
}
