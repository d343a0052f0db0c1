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

//! Kafka protocol error codes
//!
//! Every Kafka response carries `i16` error codes at the request, resource or
//! partition level. [`KafkaError::for_code`] maps such a code to a typed error,
//! returning `None` for `0` (no error).

use thiserror::Error;

/// An error reported by the cluster through a protocol error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{message}: {description}")]
pub struct KafkaError {
    code: i16,
    message: &'static str,
    description: &'static str,
    retriable: bool,
}

macro_rules! kafka_errors {
    ($( $konst:ident = ($code:expr, $retriable:expr, $description:expr); )*) => {
        impl KafkaError {
            $(
                pub const $konst: KafkaError = KafkaError {
                    code: $code,
                    message: stringify!($konst),
                    description: $description,
                    retriable: $retriable,
                };
            )*

            const KNOWN: &'static [KafkaError] = &[$(KafkaError::$konst),*];
        }
    };
}

kafka_errors! {
    UNKNOWN_SERVER_ERROR = (-1, false, "The server experienced an unexpected error when processing the request.");
    OFFSET_OUT_OF_RANGE = (1, false, "The requested offset is not within the range of offsets maintained by the server.");
    CORRUPT_MESSAGE = (2, true, "This message has failed its CRC checksum, exceeds the valid size, has a null key for a compacted topic, or is otherwise corrupt.");
    UNKNOWN_TOPIC_OR_PARTITION = (3, true, "This server does not host this topic-partition.");
    INVALID_FETCH_SIZE = (4, false, "The requested fetch size is invalid.");
    LEADER_NOT_AVAILABLE = (5, true, "There is no leader for this topic-partition as we are in the middle of a leadership election.");
    NOT_LEADER_FOR_PARTITION = (6, true, "This server is not the leader for that topic-partition.");
    REQUEST_TIMED_OUT = (7, true, "The request timed out.");
    BROKER_NOT_AVAILABLE = (8, false, "The broker is not available.");
    REPLICA_NOT_AVAILABLE = (9, true, "The replica is not available for the requested topic-partition.");
    NETWORK_EXCEPTION = (13, true, "The server disconnected before a response was received.");
    COORDINATOR_LOAD_IN_PROGRESS = (14, true, "The coordinator is loading and hence can't process requests.");
    COORDINATOR_NOT_AVAILABLE = (15, true, "The coordinator is not available.");
    NOT_COORDINATOR = (16, true, "This is not the correct coordinator.");
    INVALID_TOPIC_EXCEPTION = (17, false, "The request attempted to perform an operation on an invalid topic.");
    NOT_ENOUGH_REPLICAS = (19, true, "Messages are rejected since there are fewer in-sync replicas than required.");
    TOPIC_AUTHORIZATION_FAILED = (29, false, "Topic authorization failed.");
    GROUP_AUTHORIZATION_FAILED = (30, false, "Group authorization failed.");
    CLUSTER_AUTHORIZATION_FAILED = (31, false, "Cluster authorization failed.");
    UNSUPPORTED_SASL_MECHANISM = (33, false, "The broker does not support the requested SASL mechanism.");
    ILLEGAL_SASL_STATE = (34, false, "Request is not valid given the current SASL state.");
    UNSUPPORTED_VERSION = (35, false, "The version of API is not supported.");
    INVALID_REQUEST = (42, false, "This most likely occurs because of a request being malformed by the client library or the message was sent to an incompatible broker.");
    KAFKA_STORAGE_ERROR = (56, true, "Disk error when trying to access log file on the disk.");
    LOG_DIR_NOT_FOUND = (57, false, "The user-specified log directory is not found in the broker config.");
    SASL_AUTHENTICATION_FAILED = (58, false, "SASL Authentication failed.");
    TRANSACTIONAL_ID_AUTHORIZATION_FAILED = (53, false, "Transactional Id authorization failed.");
    DELEGATION_TOKEN_AUTHORIZATION_FAILED = (65, false, "Delegation Token authorization failed.");
    UNKNOWN_TOPIC_ID = (100, true, "This server does not host this topic ID.");
}

impl KafkaError {
    /// Placeholder for codes this table does not know about.
    const UNKNOWN_ERROR_CODE: KafkaError = KafkaError {
        code: i16::MIN,
        message: "UNKNOWN_ERROR_CODE",
        description: "The error code is not known to this client.",
        retriable: false,
    };

    /// Resolve a protocol error code
    ///
    /// Returns `None` for `0`. Codes missing from the table still produce an
    /// error carrying the original code, so a non-zero code is never ignored.
    pub fn for_code(code: i16) -> Option<KafkaError> {
        if code == 0 {
            return None;
        }
        let known = Self::KNOWN.iter().find(|e| e.code == code).copied();
        Some(known.unwrap_or(KafkaError {
            code,
            ..Self::UNKNOWN_ERROR_CODE
        }))
    }

    #[inline]
    pub fn code(&self) -> i16 {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn is_retriable(&self) -> bool {
        self.retriable
    }

    /// Whether the cluster rejected the request because the principal lacks an ACL
    pub fn is_authorization_failure(&self) -> bool {
        [
            Self::TOPIC_AUTHORIZATION_FAILED,
            Self::GROUP_AUTHORIZATION_FAILED,
            Self::CLUSTER_AUTHORIZATION_FAILED,
            Self::TRANSACTIONAL_ID_AUTHORIZATION_FAILED,
            Self::DELEGATION_TOKEN_AUTHORIZATION_FAILED,
        ]
        .iter()
        .any(|e| e.code == self.code)
    }
}
