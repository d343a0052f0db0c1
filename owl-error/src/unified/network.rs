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

//! Transport errors raised while talking to Kafka brokers

use thiserror::Error;

/// Network operation errors
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection to a seed broker failed
    #[error("Connection failed to {addr}: {reason}")]
    ConnectionFailed { addr: String, reason: String },

    /// A broker did not answer a request
    #[error("Broker {broker_id} is unreachable: {reason}")]
    BrokerUnreachable { broker_id: i32, reason: String },

    /// The request could not be completed
    #[error("Request '{api}' failed: {reason}")]
    RequestFailed { api: &'static str, reason: String },

    /// Request timeout
    #[error("Request '{api}' timed out after {timeout_ms}ms")]
    RequestTimeout { api: &'static str, timeout_ms: u64 },
}

impl NetworkError {
    /// Create a connection failed error
    #[inline]
    pub fn connection_failed(addr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            addr: addr.into(),
            reason: reason.into(),
        }
    }

    /// Create a broker unreachable error
    #[inline]
    pub fn broker_unreachable(broker_id: i32, reason: impl Into<String>) -> Self {
        Self::BrokerUnreachable {
            broker_id,
            reason: reason.into(),
        }
    }

    /// Create a request failed error
    #[inline]
    pub fn request_failed(api: &'static str, reason: impl Into<String>) -> Self {
        Self::RequestFailed {
            api,
            reason: reason.into(),
        }
    }
}
