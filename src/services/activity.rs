// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity ingestion service.
//!
//! Handles the core workflow:
//! 1. Constraint-check the submission
//! 2. Validate the owner against the user service (fail-closed)
//! 3. Persist the activity
//! 4. Publish an activity event for downstream processing (best effort)
//!
//! Persistence and publish are independent effects: a failed publish is
//! logged and swallowed, never rolled back. The caller gets a success
//! response for any activity that made it into the store.

use crate::error::{AppError, Result};
use crate::events::{ActivityEvent, EventPublisher};
use crate::models::{Activity, ActivityRequest};
use crate::services::user_validation::UserValidator;
use crate::store::ActivityStore;
use std::sync::Arc;
use validator::Validate;

pub struct ActivityService {
    validator: Arc<dyn UserValidator>,
    store: Arc<dyn ActivityStore>,
    publisher: Arc<dyn EventPublisher>,
}

impl ActivityService {
    pub fn new(
        validator: Arc<dyn UserValidator>,
        store: Arc<dyn ActivityStore>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            validator,
            store,
            publisher,
        }
    }

    /// Submit a new activity.
    pub async fn submit(&self, request: ActivityRequest) -> Result<Activity> {
        request
            .validate()
            .map_err(|err| AppError::Validation(err.to_string()))?;

        if !self.validator.validate(&request.user_id).await {
            return Err(AppError::InvalidUser(request.user_id));
        }

        let activity = request.into_activity();
        self.store.insert(activity.clone()).await?;
        tracing::info!(
            activity_id = %activity.id,
            user_id = %activity.user_id,
            activity_type = ?activity.activity_type,
            "Activity stored"
        );

        // Best-effort publish: the activity is already durable, so a channel
        // failure must not fail the request.
        if let Err(err) = self
            .publisher
            .publish(ActivityEvent::new(activity.clone()))
            .await
        {
            tracing::error!(
                activity_id = %activity.id,
                user_id = %activity.user_id,
                error = %err,
                "Failed to publish activity event"
            );
        }

        Ok(activity)
    }

    /// All activities recorded for a user, oldest first.
    ///
    /// No ownership re-check here; validity was confirmed at ingestion.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        Ok(self.store.find_by_user(user_id).await?)
    }
}
