// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process partitioned event broker.
//!
//! Reference implementation of the event channel boundary: a fixed set of
//! bounded flume channels, one per partition, with events routed by a
//! stable hash of the partition key. A single consumer group drains the
//! partitions; each partition is owned by exactly one worker, which gives
//! per-key ordering without cross-partition coordination.

use crate::events::{ActivityEvent, EventPublisher, PublishError};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delivery counters, readable while the broker runs.
#[derive(Default)]
pub struct BrokerMetrics {
    pub events_published: AtomicU64,
    pub events_consumed: AtomicU64,
    pub events_redelivered: AtomicU64,
    pub events_dead_lettered: AtomicU64,
}

/// Point-in-time copy of [`BrokerMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokerSnapshot {
    pub events_published: u64,
    pub events_consumed: u64,
    pub events_redelivered: u64,
    pub events_dead_lettered: u64,
}

pub struct InProcessBroker {
    topic: String,
    publish_timeout: Duration,
    senders: Vec<flume::Sender<ActivityEvent>>,
    receivers: Vec<flume::Receiver<ActivityEvent>>,
    dead_letter_tx: flume::Sender<ActivityEvent>,
    dead_letter_rx: flume::Receiver<ActivityEvent>,
    metrics: Arc<BrokerMetrics>,
}

impl InProcessBroker {
    /// Create a broker with `partitions` bounded channels of `capacity`
    /// events each. `publish_timeout` caps how long a publisher may wait
    /// on a full partition.
    pub fn new(
        topic: impl Into<String>,
        partitions: usize,
        capacity: usize,
        publish_timeout: Duration,
    ) -> Self {
        let partitions = partitions.max(1);
        let (senders, receivers): (Vec<_>, Vec<_>) =
            (0..partitions).map(|_| flume::bounded(capacity)).unzip();
        let (dead_letter_tx, dead_letter_rx) = flume::unbounded();

        Self {
            topic: topic.into(),
            publish_timeout,
            senders,
            receivers,
            dead_letter_tx,
            dead_letter_rx,
            metrics: Arc::new(BrokerMetrics::default()),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn partition_count(&self) -> usize {
        self.senders.len()
    }

    /// Receivers for a consumer group, one per partition. Each receiver
    /// must be drained by a single worker to keep per-key ordering.
    pub fn partition_receivers(&self) -> Vec<flume::Receiver<ActivityEvent>> {
        self.receivers.clone()
    }

    /// Messages that exhausted their delivery attempts.
    pub fn dead_letters(&self) -> flume::Receiver<ActivityEvent> {
        self.dead_letter_rx.clone()
    }

    pub fn metrics(&self) -> BrokerSnapshot {
        BrokerSnapshot {
            events_published: self.metrics.events_published.load(Ordering::Relaxed),
            events_consumed: self.metrics.events_consumed.load(Ordering::Relaxed),
            events_redelivered: self.metrics.events_redelivered.load(Ordering::Relaxed),
            events_dead_lettered: self.metrics.events_dead_lettered.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn metrics_handle(&self) -> Arc<BrokerMetrics> {
        self.metrics.clone()
    }

    pub(crate) fn dead_letter(&self, event: ActivityEvent) {
        self.metrics
            .events_dead_lettered
            .fetch_add(1, Ordering::Relaxed);
        // The dead-letter channel is unbounded and we hold a receiver, so
        // this can only fail once the broker itself is being dropped.
        let _ = self.dead_letter_tx.send(event);
    }

    fn partition_for(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.senders.len() as u64) as usize
    }
}

#[async_trait::async_trait]
impl EventPublisher for InProcessBroker {
    async fn publish(&self, event: ActivityEvent) -> Result<(), PublishError> {
        let partition = self.partition_for(event.partition_key());
        let sender = &self.senders[partition];

        match tokio::time::timeout(self.publish_timeout, sender.send_async(event)).await {
            Ok(Ok(())) => {
                self.metrics
                    .events_published
                    .fetch_add(1, Ordering::Relaxed);
                tracing::debug!(topic = %self.topic, partition, "Event published");
                Ok(())
            }
            Ok(Err(_)) => Err(PublishError::ChannelClosed),
            Err(_) => Err(PublishError::Timeout {
                after: self.publish_timeout,
            }),
        }
    }
}
