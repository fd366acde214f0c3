// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity event stream.
//!
//! Ingestion publishes one [`ActivityEvent`] per persisted activity; the
//! consumer turns each delivered event into a recommendation. Delivery is
//! at-least-once with per-user ordering; publishing is best-effort and
//! never blocks the write path past a configured ceiling.

pub mod broker;
pub mod consumer;

pub use broker::InProcessBroker;
pub use consumer::ActivityEventConsumer;

use crate::models::Activity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Wire representation of a persisted activity on the event channel.
///
/// Carries a full copy of the activity at the moment of persistence and is
/// partitioned by the owner's user ID, so one user's events stay ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    /// Event identifier, distinct from the activity id
    pub event_id: Uuid,
    pub emitted_at: DateTime<Utc>,
    pub activity: Activity,
}

impl ActivityEvent {
    pub fn new(activity: Activity) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            emitted_at: Utc::now(),
            activity,
        }
    }

    /// Partition key; messages sharing it are delivered in order.
    pub fn partition_key(&self) -> &str {
        &self.activity.user_id
    }
}

/// Publish failures. The ingestion service logs and swallows these; the
/// request still succeeds once the activity is durable.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("publish timed out after {after:?} (channel backpressure)")]
    Timeout { after: Duration },
    #[error("event channel is closed")]
    ChannelClosed,
}

/// Consumer-side failures. Never surfaced to a client; recovered through
/// redelivery until the attempt limit runs out.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("recommendation generation failed: {0}")]
    Generation(#[from] crate::services::generator::GenerationError),
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),
}

/// Seam between ingestion and the event channel, so tests can inject
/// publish failures.
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: ActivityEvent) -> Result<(), PublishError>;
}
