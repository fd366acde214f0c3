// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommendation query routes.

use crate::error::Result;
use crate::models::Recommendation;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/recommendations/user/{user_id}",
            get(list_user_recommendations),
        )
        .route(
            "/api/recommendations/activity/{activity_id}",
            get(list_activity_recommendations),
        )
}

/// Recommendations for a user. Empty list when none exist yet.
async fn list_user_recommendations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Recommendation>>> {
    let recommendations = state
        .recommendation_service
        .list_by_user(&user_id)
        .await?;
    Ok(Json(recommendations))
}

/// Recommendations derived from one activity. 404 when none exist.
async fn list_activity_recommendations(
    State(state): State<Arc<AppState>>,
    Path(activity_id): Path<Uuid>,
) -> Result<Json<Vec<Recommendation>>> {
    let recommendations = state
        .recommendation_service
        .list_by_activity(activity_id)
        .await?;
    Ok(Json(recommendations))
}
