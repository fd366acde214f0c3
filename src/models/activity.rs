// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model for storage and the event stream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

/// Category of a recorded exercise session.
///
/// Unknown categories from clients deserialize as `Other` rather than
/// failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Run,
    Walk,
    Cycling,
    Swim,
    WeightTraining,
    Yoga,
    Cardio,
    #[serde(other)]
    Other,
}

/// Stored activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Assigned identifier (also the storage key)
    pub id: Uuid,
    /// Owner user ID, validated against the user service at ingestion
    pub user_id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration: i64,
    pub calories_burned: i64,
    pub start_time: DateTime<Utc>,
    /// Activity-specific metrics (distance, heart rate, ...)
    #[serde(default)]
    pub additional_metrics: HashMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming activity submission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: i64,
    #[validate(range(min = 0, message = "caloriesBurned must not be negative"))]
    pub calories_burned: i64,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub additional_metrics: HashMap<String, serde_json::Value>,
}

impl ActivityRequest {
    /// Build the record to persist, assigning id and server timestamps.
    pub fn into_activity(self) -> Activity {
        let now = Utc::now();
        Activity {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            activity_type: self.activity_type,
            duration: self.duration,
            calories_burned: self.calories_burned,
            start_time: self.start_time,
            additional_metrics: self.additional_metrics,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_id: &str, duration: i64, calories: i64) -> ActivityRequest {
        ActivityRequest {
            user_id: user_id.to_string(),
            activity_type: ActivityType::Run,
            duration,
            calories_burned: calories,
            start_time: Utc::now(),
            additional_metrics: HashMap::new(),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(request("u1", 30, 300).validate().is_ok());
    }

    #[test]
    fn test_empty_user_id_rejected() {
        assert!(request("", 30, 300).validate().is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(request("u1", 0, 300).validate().is_err());
    }

    #[test]
    fn test_negative_calories_rejected() {
        assert!(request("u1", 30, -1).validate().is_err());
    }

    #[test]
    fn test_into_activity_assigns_id_and_timestamps() {
        let activity = request("u1", 30, 300).into_activity();
        assert_eq!(activity.user_id, "u1");
        assert_eq!(activity.created_at, activity.updated_at);
    }

    #[test]
    fn test_activity_type_wire_names() {
        let json = serde_json::to_string(&ActivityType::WeightTraining).unwrap();
        assert_eq!(json, "\"WEIGHT_TRAINING\"");

        let parsed: ActivityType = serde_json::from_str("\"RUN\"").unwrap();
        assert_eq!(parsed, ActivityType::Run);
    }

    #[test]
    fn test_unknown_activity_type_maps_to_other() {
        let parsed: ActivityType = serde_json::from_str("\"PARKOUR\"").unwrap();
        assert_eq!(parsed, ActivityType::Other);
    }
}
