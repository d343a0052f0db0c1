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

//! Integration tests for KafkaError with OwlError

use owl_error::KafkaError;
use owl_error::NetworkError;
use owl_error::OwlError;

#[test]
fn test_kafka_error_into_owl_error() {
    let kafka_err = KafkaError::for_code(31).unwrap();
    let owl_err: OwlError = kafka_err.into();

    assert!(matches!(owl_err, OwlError::Kafka(_)));
    assert!(owl_err.is_authorization_failure());
    assert!(owl_err.to_string().starts_with("CLUSTER_AUTHORIZATION_FAILED"));
}

#[test]
fn test_network_error_into_owl_error() {
    let owl_err = OwlError::from(NetworkError::broker_unreachable(4, "connection refused"));

    assert!(matches!(owl_err, OwlError::Network(NetworkError::BrokerUnreachable { broker_id: 4, .. })));
    assert!(!owl_err.is_authorization_failure());
    assert!(owl_err.kafka_error().is_none());
}

#[test]
fn test_serde_errors_convert() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let owl_err = OwlError::from(json_err);
    assert!(matches!(owl_err, OwlError::Serialization { format: "JSON", .. }));

    let yaml_err = serde_yaml::from_str::<Vec<i32>>("a: [").unwrap_err();
    let owl_err = OwlError::from(yaml_err);
    assert!(matches!(owl_err, OwlError::Serialization { format: "YAML", .. }));
}
