// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: keyed stores for activities and recommendations.
//!
//! The traits are the persistence boundary of the pipeline; the in-memory
//! implementations in [`memory`] back the binary and the tests. Anything
//! fancier (real databases, migrations) lives behind the same seam.

pub mod memory;

pub use memory::{InMemoryActivityStore, InMemoryRecommendationStore};

use crate::models::{Activity, Recommendation};
use uuid::Uuid;

/// Storage failures, fatal to the triggering request.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Durable keyed storage for activity records, indexed by owner.
#[async_trait::async_trait]
pub trait ActivityStore: Send + Sync {
    /// Persist a new activity record.
    async fn insert(&self, activity: Activity) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, StoreError>;

    /// All activities owned by a user, oldest first. Empty for unknown users.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Activity>, StoreError>;
}

/// Durable keyed storage for recommendations, indexed by user and by
/// source activity.
#[async_trait::async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn insert(&self, recommendation: Recommendation) -> Result<(), StoreError>;

    /// Empty for unknown users; callers decide whether that is an error.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Recommendation>, StoreError>;

    async fn find_by_activity(&self, activity_id: Uuid) -> Result<Vec<Recommendation>, StoreError>;
}
