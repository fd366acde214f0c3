// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory reference stores backed by `DashMap`.
//!
//! Safe for concurrent use from handlers and consumer workers. Query
//! results are sorted by creation time so repeated reads are stable.

use crate::models::{Activity, Recommendation};
use crate::store::{ActivityStore, RecommendationStore, StoreError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

/// Concurrent in-memory activity store.
#[derive(Default)]
pub struct InMemoryActivityStore {
    records: DashMap<Uuid, Activity>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn insert(&self, activity: Activity) -> Result<(), StoreError> {
        match self.records.entry(activity.id) {
            Entry::Occupied(_) => Err(StoreError::Operation(format!(
                "duplicate activity id {}",
                activity.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(activity);
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, StoreError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Activity>, StoreError> {
        let mut activities: Vec<Activity> = self
            .records
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(activities)
    }
}

/// Concurrent in-memory recommendation store.
#[derive(Default)]
pub struct InMemoryRecommendationStore {
    records: DashMap<Uuid, Recommendation>,
}

impl InMemoryRecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecommendationStore for InMemoryRecommendationStore {
    async fn insert(&self, recommendation: Recommendation) -> Result<(), StoreError> {
        self.records.insert(recommendation.id, recommendation);
        Ok(())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Recommendation>, StoreError> {
        let mut recommendations: Vec<Recommendation> = self
            .records
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        recommendations.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(recommendations)
    }

    async fn find_by_activity(&self, activity_id: Uuid) -> Result<Vec<Recommendation>, StoreError> {
        let mut recommendations: Vec<Recommendation> = self
            .records
            .iter()
            .filter(|entry| entry.value().activity_id == activity_id)
            .map(|entry| entry.value().clone())
            .collect();
        recommendations.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(recommendations)
    }
}
