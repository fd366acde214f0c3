// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read path over the recommendation store.

use crate::error::{AppError, Result};
use crate::models::Recommendation;
use crate::store::RecommendationStore;
use std::sync::Arc;
use uuid::Uuid;

pub struct RecommendationService {
    store: Arc<dyn RecommendationStore>,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn RecommendationStore>) -> Self {
        Self { store }
    }

    /// Recommendations for a user; empty for unknown users, never an error.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Recommendation>> {
        Ok(self.store.find_by_user(user_id).await?)
    }

    /// Recommendations derived from one activity.
    ///
    /// Unlike the by-user lookup, an empty result here is a `NotFound`
    /// error.
    pub async fn list_by_activity(&self, activity_id: Uuid) -> Result<Vec<Recommendation>> {
        let recommendations = self.store.find_by_activity(activity_id).await?;
        if recommendations.is_empty() {
            return Err(AppError::NotFound(format!(
                "No recommendations found for activity {}",
                activity_id
            )));
        }
        Ok(recommendations)
    }
}
