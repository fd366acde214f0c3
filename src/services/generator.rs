// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommendation generation strategy.
//!
//! The pipeline treats generation as opaque: anything that can turn an
//! activity into recommendation content plugs in behind
//! [`RecommendationGenerator`]. The default is a deterministic rule-based
//! generator; an LLM-backed one would implement the same trait.

use crate::models::{Activity, ActivityType, Recommendation};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct GenerationError(pub String);

/// Strategy for deriving a recommendation from an activity.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, activity: &Activity) -> Result<Recommendation, GenerationError>;
}

/// Deterministic generator keyed off activity type, duration and calories.
#[derive(Default)]
pub struct RuleBasedGenerator;

impl RuleBasedGenerator {
    pub fn new() -> Self {
        Self
    }

    fn analysis(activity: &Activity) -> String {
        let label = match activity.activity_type {
            ActivityType::Run => "run",
            ActivityType::Walk => "walk",
            ActivityType::Cycling => "ride",
            ActivityType::Swim => "swim",
            ActivityType::WeightTraining => "strength session",
            ActivityType::Yoga => "yoga session",
            ActivityType::Cardio => "cardio session",
            ActivityType::Other => "workout",
        };
        format!(
            "Your {} minute {} burned {} calories. Keeping a consistent schedule \
             matters more than any single session.",
            activity.duration, label, activity.calories_burned
        )
    }

    fn improvements(activity: &Activity) -> Vec<String> {
        let mut improvements = Vec::new();
        if activity.duration < 20 {
            improvements
                .push("Work toward at least 20 minutes per session for aerobic benefit".to_string());
        }
        if activity.duration > 90 {
            improvements.push("Plan a recovery day after long sessions".to_string());
        }
        if improvements.is_empty() {
            improvements.push("Maintain your current routine and increase load gradually".to_string());
        }
        improvements
    }

    fn suggestions(activity: &Activity) -> Vec<String> {
        match activity.activity_type {
            ActivityType::Run | ActivityType::Walk => vec![
                "Track your pace to see progress over time".to_string(),
                "Mix in one longer distance per week".to_string(),
            ],
            ActivityType::Cycling => vec![
                "Vary terrain to build endurance and strength together".to_string(),
            ],
            ActivityType::WeightTraining => vec![
                "Alternate muscle groups between sessions".to_string(),
                "Log weights so progressive overload is visible".to_string(),
            ],
            _ => vec!["Pair this with a complementary strength or mobility session".to_string()],
        }
    }
}

#[async_trait]
impl RecommendationGenerator for RuleBasedGenerator {
    async fn generate(&self, activity: &Activity) -> Result<Recommendation, GenerationError> {
        Ok(Recommendation {
            id: Uuid::new_v4(),
            activity_id: activity.id,
            user_id: activity.user_id.clone(),
            activity_type: activity.activity_type,
            recommendation: Self::analysis(activity),
            improvements: Self::improvements(activity),
            suggestions: Self::suggestions(activity),
            safety: vec![
                "Always warm up before exercise".to_string(),
                "Stay hydrated".to_string(),
                "Stop if you feel pain".to_string(),
            ],
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityRequest;
    use std::collections::HashMap;

    fn activity(activity_type: ActivityType, duration: i64) -> Activity {
        ActivityRequest {
            user_id: "u1".to_string(),
            activity_type,
            duration,
            calories_burned: 300,
            start_time: Utc::now(),
            additional_metrics: HashMap::new(),
        }
        .into_activity()
    }

    #[tokio::test]
    async fn test_recommendation_traces_to_source_activity() {
        let source = activity(ActivityType::Run, 30);
        let rec = RuleBasedGenerator::new().generate(&source).await.unwrap();

        assert_eq!(rec.activity_id, source.id);
        assert_eq!(rec.user_id, source.user_id);
        assert_ne!(rec.id, source.id);
        assert!(!rec.safety.is_empty());
    }

    #[tokio::test]
    async fn test_short_session_gets_duration_improvement() {
        let rec = RuleBasedGenerator::new()
            .generate(&activity(ActivityType::Walk, 10))
            .await
            .unwrap();
        assert!(rec.improvements.iter().any(|i| i.contains("20 minutes")));
    }

    #[tokio::test]
    async fn test_generation_is_deterministic_in_content() {
        let source = activity(ActivityType::Cycling, 45);
        let gen = RuleBasedGenerator::new();
        let a = gen.generate(&source).await.unwrap();
        let b = gen.generate(&source).await.unwrap();

        assert_eq!(a.recommendation, b.recommendation);
        assert_eq!(a.suggestions, b.suggestions);
        // Ids differ: each generated recommendation is its own record.
        assert_ne!(a.id, b.id);
    }
}
