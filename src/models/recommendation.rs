// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommendation model: derived asynchronously from activity events.

use crate::models::ActivityType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored recommendation record.
///
/// Created only by the event consumer, never directly by a client. Under
/// at-least-once delivery the same activity can legitimately produce more
/// than one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    /// Source activity this was derived from
    pub activity_id: Uuid,
    pub user_id: String,
    pub activity_type: ActivityType,
    /// Analysis text produced by the generator
    pub recommendation: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    pub safety: Vec<String>,
    pub created_at: DateTime<Utc>,
}
