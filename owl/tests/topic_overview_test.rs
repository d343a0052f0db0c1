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

use std::sync::Arc;
use std::time::Duration;

use cheetah_string::CheetahString;
use owl::kafka::BrokerLogDirs;
use owl::kafka::ClusterSnapshot;
use owl::kafka::ConfigEntry;
use owl::kafka::ConfigSource;
use owl::kafka::KafkaAdmin;
use owl::kafka::LogDir;
use owl::kafka::LogDirPartition;
use owl::kafka::LogDirReport;
use owl::kafka::LogDirTopic;
use owl::kafka::MetadataSnapshot;
use owl::kafka::PartitionMetadata;
use owl::kafka::StaticKafkaAdmin;
use owl::kafka::TopicConfigDescription;
use owl::kafka::TopicConfigs;
use owl::kafka::TopicMetadata;
use owl::kafka::CLEANUP_POLICY;
use owl::owl::OverviewService;
use owl::owl::OverviewServiceBuilder;
use owl::owl::StaticTopicActions;
use owl::owl::TopicAction;
use owl::owl::CLEANUP_POLICY_UNKNOWN;
use owl::owl::LOG_DIR_SIZE_UNKNOWN;
use owl_error::KafkaError;
use owl_error::OwlError;
use owl_error::OwlResult;
use tokio::sync::Barrier;
use tokio_util::sync::CancellationToken;

fn topic(name: &str, replicas: &[&[i32]]) -> TopicMetadata {
    TopicMetadata {
        topic: CheetahString::from(name),
        is_internal: false,
        error_code: 0,
        partitions: replicas
            .iter()
            .enumerate()
            .map(|(i, replicas)| PartitionMetadata {
                partition: i as i32,
                leader: replicas[0],
                replicas: replicas.to_vec(),
                isr: replicas.to_vec(),
                error_code: 0,
            })
            .collect(),
    }
}

fn broker(broker_id: i32, topics: &[(&str, &[i64])]) -> BrokerLogDirs {
    BrokerLogDirs {
        broker_id,
        error: None,
        dirs: vec![LogDir {
            path: "/var/lib/kafka".to_string(),
            error_code: 0,
            topics: topics
                .iter()
                .map(|(name, sizes)| LogDirTopic {
                    topic: CheetahString::from(*name),
                    partitions: sizes
                        .iter()
                        .enumerate()
                        .map(|(partition, &size)| LogDirPartition {
                            partition: partition as i32,
                            size,
                        })
                        .collect(),
                })
                .collect(),
        }],
    }
}

fn cleanup_policy(topic: &str, error_code: i16, value: &str) -> TopicConfigDescription {
    TopicConfigDescription {
        topic: CheetahString::from(topic),
        error_code,
        entries: vec![ConfigEntry {
            name: CLEANUP_POLICY.to_string(),
            value: Some(value.to_string()),
            source: ConfigSource::DefaultConfig,
            is_sensitive: false,
            is_read_only: false,
        }],
    }
}

/// `orders` is fully visible; `payments` lives on an unreachable broker and its
/// config is denied.
fn orders_and_payments() -> ClusterSnapshot {
    let mut unreachable = broker(3, &[]);
    unreachable.error = Some("connection refused".to_string());

    ClusterSnapshot {
        metadata: MetadataSnapshot {
            topics: vec![
                topic("payments", &[&[3]]),
                topic("orders", &[&[1, 2], &[2, 1], &[1, 2]]),
            ],
            ..Default::default()
        },
        log_dirs: Some(LogDirReport {
            brokers: vec![
                broker(1, &[("orders", &[1024, 512, 512])]),
                broker(2, &[("orders", &[1024, 512, 512])]),
                unreachable,
            ],
        }),
        topic_configs: Some(vec![
            cleanup_policy("orders", 0, "delete"),
            cleanup_policy("payments", KafkaError::TOPIC_AUTHORIZATION_FAILED.code(), "compact"),
        ]),
    }
}

async fn overview(snapshot: ClusterSnapshot) -> OwlResult<Vec<owl::owl::TopicOverview>> {
    OverviewService::new(StaticKafkaAdmin::new(snapshot))
        .get_topics_overview(&CancellationToken::new())
        .await
}

#[tokio::test]
async fn orders_and_payments_scenario() {
    let overview = overview(orders_and_payments()).await.unwrap();
    let rows: Vec<_> = overview
        .iter()
        .map(|t| {
            (
                t.topic_name().as_str(),
                t.partition_count(),
                t.replication_factor(),
                t.cleanup_policy(),
                t.log_dir_size(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("orders", 3, 2, "delete", 4096),
            ("payments", 1, 1, CLEANUP_POLICY_UNKNOWN, LOG_DIR_SIZE_UNKNOWN),
        ]
    );
}

#[tokio::test]
async fn one_row_per_metadata_topic() {
    let mut snapshot = orders_and_payments();
    snapshot.metadata.topics.push(topic("audit", &[&[1]]));
    snapshot.metadata.topics.push(topic("__consumer_offsets", &[&[1, 2]]));
    let overview = overview(snapshot).await.unwrap();
    assert_eq!(overview.len(), 4);
}

fn permutations(items: Vec<TopicMetadata>) -> Vec<Vec<TopicMetadata>> {
    if items.len() <= 1 {
        return vec![items];
    }
    let mut res = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.clone();
        let head = rest.remove(i);
        for mut tail in permutations(rest) {
            tail.insert(0, head.clone());
            res.push(tail);
        }
    }
    res
}

#[tokio::test]
async fn sorted_for_every_input_order() {
    let topics = vec![
        topic("payments", &[&[1]]),
        topic("Orders", &[&[1]]),
        topic("orders", &[&[1]]),
        topic("_schemas", &[&[1]]),
    ];
    for permutation in permutations(topics) {
        let mut snapshot = orders_and_payments();
        snapshot.metadata.topics = permutation;
        let names: Vec<String> = overview(snapshot)
            .await
            .unwrap()
            .iter()
            .map(|t| t.topic_name().to_string())
            .collect();
        assert_eq!(names, vec!["Orders", "_schemas", "orders", "payments"]);
    }
}

#[tokio::test]
async fn log_dir_failure_is_not_fatal() {
    let mut snapshot = orders_and_payments();
    snapshot.log_dirs = None;
    let overview = overview(snapshot).await.unwrap();
    assert_eq!(overview.len(), 2);
    assert!(overview.iter().all(|t| t.log_dir_size() == LOG_DIR_SIZE_UNKNOWN));
    assert_eq!(overview[0].cleanup_policy(), "delete");
}

#[tokio::test]
async fn replica_missing_from_clean_report_is_unknown() {
    let mut snapshot = orders_and_payments();
    snapshot.log_dirs = Some(LogDirReport {
        brokers: vec![broker(1, &[("orders", &[1024, 512, 512])]), broker(2, &[])],
    });
    let overview = overview(snapshot).await.unwrap();
    assert_eq!(overview[0].topic_name().as_str(), "orders");
    assert_eq!(overview[0].log_dir_size(), LOG_DIR_SIZE_UNKNOWN);
}

#[tokio::test]
async fn denied_configs_are_unknown() {
    let mut snapshot = orders_and_payments();
    snapshot.topic_configs = None;
    let overview = overview(snapshot).await.unwrap();
    assert!(overview.iter().all(|t| t.cleanup_policy() == CLEANUP_POLICY_UNKNOWN));
    assert_eq!(overview[0].log_dir_size(), 4096);
}

#[tokio::test]
async fn topic_metadata_error_fails_everything() {
    let mut snapshot = orders_and_payments();
    snapshot.metadata.topics[0].error_code = KafkaError::TOPIC_AUTHORIZATION_FAILED.code();
    match overview(snapshot).await {
        Err(OwlError::TopicMetadata { topic, source }) => {
            assert_eq!(topic, "payments");
            assert!(source.is_authorization_failure());
        }
        other => panic!("expected a topic metadata error, got {other:?}"),
    }
}

#[tokio::test]
async fn output_is_idempotent() {
    let service = OverviewServiceBuilder::new(StaticKafkaAdmin::new(orders_and_payments()))
        .topic_actions(
            StaticTopicActions::new(vec![TopicAction::SeeTopic]).with_override("orders", vec![TopicAction::All]),
        )
        .build();
    let cancel = CancellationToken::new();

    let first = serde_json::to_string(&service.get_topics_overview(&cancel).await.unwrap()).unwrap();
    let second = serde_json::to_string(&service.get_topics_overview(&cancel).await.unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        r#"[{"topicName":"orders","isInternal":false,"partitionCount":3,"replicationFactor":2,"cleanupPolicy":"delete","logDirSize":4096,"allowedActions":["all"]},{"topicName":"payments","isInternal":false,"partitionCount":1,"replicationFactor":1,"cleanupPolicy":"N/A","logDirSize":-1,"allowedActions":["seeTopic"]}]"#
    );
}

/// Log dirs and configs each wait for the other, so they only complete when
/// issued concurrently. Optionally they never complete at all.
struct RendezvousAdmin {
    metadata: MetadataSnapshot,
    barrier: Arc<Barrier>,
    hang: bool,
}

impl RendezvousAdmin {
    async fn rendezvous(&self) {
        self.barrier.wait().await;
        if self.hang {
            std::future::pending::<()>().await;
        }
    }
}

impl KafkaAdmin for RendezvousAdmin {
    async fn fetch_metadata(&self, _topics: Option<&[CheetahString]>) -> OwlResult<MetadataSnapshot> {
        Ok(self.metadata.clone())
    }

    async fn fetch_log_dirs(&self, _topics: Option<&[CheetahString]>) -> OwlResult<LogDirReport> {
        self.rendezvous().await;
        Ok(LogDirReport {
            brokers: vec![broker(1, &[("orders", &[7])])],
        })
    }

    async fn fetch_topic_configs(&self, topics: &[CheetahString], _config_keys: &[&str]) -> OwlResult<TopicConfigs> {
        self.rendezvous().await;
        Ok(topics
            .iter()
            .map(|name| (name.clone(), cleanup_policy(name.as_str(), 0, "compact")))
            .collect())
    }
}

fn rendezvous_admin(hang: bool) -> RendezvousAdmin {
    RendezvousAdmin {
        metadata: MetadataSnapshot {
            topics: vec![topic("orders", &[&[1]])],
            ..Default::default()
        },
        barrier: Arc::new(Barrier::new(2)),
        hang,
    }
}

#[tokio::test]
async fn sub_fetches_run_concurrently() {
    let service = OverviewService::new(rendezvous_admin(false));
    let overview = tokio::time::timeout(
        Duration::from_secs(5),
        service.get_topics_overview(&CancellationToken::new()),
    )
    .await
    .expect("log dirs and configs were not fetched concurrently")
    .unwrap();
    assert_eq!(overview[0].log_dir_size(), 7);
    assert_eq!(overview[0].cleanup_policy(), "compact");
}

#[tokio::test]
async fn cancellation_abandons_outstanding_fetches() {
    let service = OverviewService::new(rendezvous_admin(true));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = tokio::time::timeout(Duration::from_secs(5), service.get_topics_overview(&cancel))
        .await
        .expect("cancellation was not observed")
        .unwrap_err();
    assert!(err.is_cancelled());
}
