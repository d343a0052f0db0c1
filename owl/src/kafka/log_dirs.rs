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

//! Log directory reports as returned by DescribeLogDirs, one entry per broker

use cheetah_string::CheetahString;
use owl_error::KafkaError;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDirReport {
    #[serde(default)]
    pub brokers: Vec<BrokerLogDirs>,
}

/// The answer of a single broker
///
/// `error` is set when the broker could not be asked or did not answer; its
/// `dirs` are empty in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerLogDirs {
    pub broker_id: i32,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub dirs: Vec<LogDir>,
}

impl BrokerLogDirs {
    /// The broker answered and every one of its log dirs is readable
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.dirs.iter().all(|dir| dir.error().is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDir {
    pub path: String,
    #[serde(default)]
    pub error_code: i16,
    #[serde(default)]
    pub topics: Vec<LogDirTopic>,
}

impl LogDir {
    #[inline]
    pub fn error(&self) -> Option<KafkaError> {
        KafkaError::for_code(self.error_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDirTopic {
    pub topic: CheetahString,
    #[serde(default)]
    pub partitions: Vec<LogDirPartition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDirPartition {
    pub partition: i32,
    /// Bytes on disk for this replica
    pub size: i64,
}
