// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity event consumer.
//!
//! One long-lived worker per partition pulls events sequentially, derives
//! a recommendation and persists it, then acknowledges. An event is only
//! acknowledged after the recommendation is durably stored, so a failure
//! anywhere in between causes redelivery: effectively at-least-once, with
//! duplicate recommendations preferred over lost ones.

use crate::events::{ActivityEvent, InProcessBroker, ProcessingError};
use crate::services::generator::RecommendationGenerator;
use crate::store::RecommendationStore;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delay between redelivery attempts for one event.
const RETRY_DELAY: Duration = Duration::from_millis(50);

/// Turns delivered activity events into stored recommendations.
pub struct ActivityEventConsumer {
    generator: Arc<dyn RecommendationGenerator>,
    store: Arc<dyn RecommendationStore>,
}

impl ActivityEventConsumer {
    pub fn new(
        generator: Arc<dyn RecommendationGenerator>,
        store: Arc<dyn RecommendationStore>,
    ) -> Self {
        Self { generator, store }
    }

    /// Process one delivered event: generate, then persist.
    pub async fn handle(&self, event: &ActivityEvent) -> Result<(), ProcessingError> {
        tracing::info!(
            event_id = %event.event_id,
            activity_id = %event.activity.id,
            user_id = %event.activity.user_id,
            "Received activity event"
        );
        let recommendation = self.generator.generate(&event.activity).await?;
        self.store.insert(recommendation).await?;
        Ok(())
    }
}

/// Spawn the consumer group: one worker task per partition.
///
/// Each worker owns its partition receiver, so events sharing a partition
/// key are never processed concurrently. Workers run for the life of the
/// process; the returned handles are mainly useful to tests.
pub fn spawn_workers(
    broker: Arc<InProcessBroker>,
    consumer: Arc<ActivityEventConsumer>,
    group: &str,
    max_attempts: u32,
) -> Vec<JoinHandle<()>> {
    let max_attempts = max_attempts.max(1);

    broker
        .partition_receivers()
        .into_iter()
        .enumerate()
        .map(|(partition, rx)| {
            let broker = broker.clone();
            let consumer = consumer.clone();
            let metrics = broker.metrics_handle();
            let group = group.to_string();

            tokio::spawn(async move {
                tracing::info!(group = %group, partition, "Consumer worker started");

                while let Ok(event) = rx.recv_async().await {
                    let mut attempt = 1u32;
                    loop {
                        match consumer.handle(&event).await {
                            Ok(()) => {
                                metrics.events_consumed.fetch_add(1, Ordering::Relaxed);
                                break;
                            }
                            Err(err) if attempt < max_attempts => {
                                tracing::warn!(
                                    group = %group,
                                    partition,
                                    event_id = %event.event_id,
                                    attempt,
                                    error = %err,
                                    "Event processing failed, redelivering"
                                );
                                metrics.events_redelivered.fetch_add(1, Ordering::Relaxed);
                                attempt += 1;
                                tokio::time::sleep(RETRY_DELAY).await;
                            }
                            Err(err) => {
                                tracing::error!(
                                    group = %group,
                                    partition,
                                    event_id = %event.event_id,
                                    attempts = attempt,
                                    error = %err,
                                    "Event processing failed permanently"
                                );
                                broker.dead_letter(event);
                                break;
                            }
                        }
                    }
                }

                tracing::info!(group = %group, partition, "Consumer worker stopped");
            })
        })
        .collect()
}
