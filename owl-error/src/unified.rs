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

//! Unified error system for Owl
//!
//! All errors raised while querying a cluster are categorized into logical
//! groups. Only [`OwlError`] crosses crate boundaries.

mod config;
mod kafka;
mod network;

use std::io;

pub use config::ConfigError;
pub use kafka::KafkaError;
pub use network::NetworkError;
use thiserror::Error;

/// Main error type for all Owl operations
///
/// # Examples
///
/// ```rust
/// use owl_error::KafkaError;
/// use owl_error::OwlError;
/// use owl_error::OwlResult;
///
/// fn check_topic(topic: &str, error_code: i16) -> OwlResult<()> {
///     if let Some(source) = KafkaError::for_code(error_code) {
///         return Err(OwlError::topic_metadata(topic, source));
///     }
///     Ok(())
/// }
///
/// assert!(check_topic("orders", 0).is_ok());
/// assert!(check_topic("orders", 3).is_err());
/// ```
#[derive(Debug, Error)]
pub enum OwlError {
    // ============================================================================
    // Cluster Errors
    // ============================================================================
    /// Request-level error code returned by the cluster
    #[error(transparent)]
    Kafka(#[from] KafkaError),

    /// Per-topic error code inside a metadata response
    #[error("Failed to get metadata of topic '{topic}': {source}")]
    TopicMetadata {
        topic: String,
        #[source]
        source: KafkaError,
    },

    /// Metadata response violates a basic invariant
    #[error("Inconsistent cluster metadata: {reason}")]
    MetadataInconsistent { reason: String },

    // ============================================================================
    // Network Errors
    // ============================================================================
    /// Transport failure (connection, unreachable broker, failed request)
    #[error(transparent)]
    Network(#[from] NetworkError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error(transparent)]
    Config(#[from] ConfigError),

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// Encoding or decoding failed
    #[error("{format} serialization failed: {reason}")]
    Serialization { format: &'static str, reason: String },

    // ============================================================================
    // System Errors
    // ============================================================================
    /// The caller abandoned the request
    #[error("Operation '{operation}' was cancelled")]
    Cancelled { operation: &'static str },

    /// IO error from std::io
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// Illegal argument
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// Internal error (should be rare)
    #[error("Internal error: {0}")]
    Internal(String),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl OwlError {
    /// Create a per-topic metadata error
    #[inline]
    pub fn topic_metadata(topic: impl Into<String>, source: KafkaError) -> Self {
        Self::TopicMetadata {
            topic: topic.into(),
            source,
        }
    }

    /// Create a metadata inconsistency error
    #[inline]
    pub fn metadata_inconsistent(reason: impl Into<String>) -> Self {
        Self::MetadataInconsistent { reason: reason.into() }
    }

    /// Create a cancelled error
    #[inline]
    pub fn cancelled(operation: &'static str) -> Self {
        Self::Cancelled { operation }
    }

    /// Create a broker unreachable error
    #[inline]
    pub fn broker_unreachable(broker_id: i32, reason: impl Into<String>) -> Self {
        Self::Network(NetworkError::broker_unreachable(broker_id, reason))
    }

    /// Create a request failed error
    #[inline]
    pub fn request_failed(api: &'static str, reason: impl Into<String>) -> Self {
        Self::Network(NetworkError::request_failed(api, reason))
    }

    /// Create a missing configuration error
    #[inline]
    pub fn config_missing(key: &'static str) -> Self {
        Self::Config(ConfigError::Missing { key })
    }

    /// Create an invalid configuration error
    #[inline]
    pub fn config_invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config(ConfigError::invalid_value(key, value, reason))
    }

    /// Create an illegal argument error
    #[inline]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    /// The Kafka error code behind this error, if the cluster reported one
    pub fn kafka_error(&self) -> Option<KafkaError> {
        match self {
            Self::Kafka(e) => Some(*e),
            Self::TopicMetadata { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// Whether the cluster denied the request for lack of permissions
    pub fn is_authorization_failure(&self) -> bool {
        self.kafka_error()
            .is_some_and(|e| e.is_authorization_failure())
    }

    /// Whether this error stems from the caller abandoning the request
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

// ============================================================================
// Error Conversion Implementations
// ============================================================================

#[cfg(feature = "with_serde")]
impl From<serde_json::Error> for OwlError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON",
            reason: e.to_string(),
        }
    }
}

#[cfg(feature = "with_serde")]
impl From<serde_yaml::Error> for OwlError {
    #[inline]
    fn from(e: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML",
            reason: e.to_string(),
        }
    }
}

#[cfg(feature = "with_config")]
impl From<::config::ConfigError> for OwlError {
    fn from(e: ::config::ConfigError) -> Self {
        Self::Config(ConfigError::from(e))
    }
}

/// Result type alias
pub type OwlResult<T> = std::result::Result<T, OwlError>;
