// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity ingestion and history routes.

use crate::error::Result;
use crate::models::{Activity, ActivityRequest};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", post(create_activity))
        .route("/api/activities/user/{user_id}", get(list_user_activities))
}

/// Submit a new activity.
///
/// Returns the stored representation; the derived recommendation arrives
/// asynchronously and is not part of this response.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ActivityRequest>,
) -> Result<Json<Activity>> {
    let activity = state.activity_service.submit(request).await?;
    Ok(Json(activity))
}

/// List a user's activities, oldest first. Empty list for unknown users.
async fn list_user_activities(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Activity>>> {
    let activities = state.activity_service.list_by_user(&user_id).await?;
    Ok(Json(activities))
}
