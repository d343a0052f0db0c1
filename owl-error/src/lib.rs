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

//! # Owl Error Handling
//!
//! A single error type, [`OwlError`], for every operation that talks to a
//! Kafka cluster, plus [`KafkaError`] for protocol error codes returned by the
//! cluster.
//!
//! ```rust
//! use owl_error::OwlError;
//! use owl_error::OwlResult;
//!
//! fn require_snapshot(path: Option<&str>) -> OwlResult<&str> {
//!     path.ok_or_else(|| OwlError::config_missing("snapshot"))
//! }
//! # assert!(require_snapshot(None).is_err());
//! ```

pub mod unified;

pub use unified::ConfigError;
pub use unified::KafkaError;
pub use unified::NetworkError;
pub use unified::OwlError;
pub use unified::OwlResult;
