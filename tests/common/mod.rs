// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use fittrack::config::Config;
use fittrack::events::{
    consumer, ActivityEvent, ActivityEventConsumer, EventPublisher, InProcessBroker, PublishError,
};
use fittrack::routes::create_router;
use fittrack::services::{
    ActivityService, RecommendationService, RuleBasedGenerator, UserValidator,
};
use fittrack::store::{InMemoryActivityStore, InMemoryRecommendationStore};
use fittrack::AppState;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Validator stub with a fixed answer.
#[allow(dead_code)]
pub struct StubValidator(pub bool);

#[async_trait]
impl UserValidator for StubValidator {
    async fn validate(&self, _user_id: &str) -> bool {
        self.0
    }
}

/// Publisher that always fails, to exercise the best-effort publish path.
#[allow(dead_code)]
pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: ActivityEvent) -> Result<(), PublishError> {
        Err(PublishError::ChannelClosed)
    }
}

/// Fully wired test application with in-memory dependencies.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub broker: Arc<InProcessBroker>,
    pub activity_store: Arc<InMemoryActivityStore>,
    pub recommendation_store: Arc<InMemoryRecommendationStore>,
}

/// Create a test app whose validator accepts every user.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    create_test_app_with(Arc::new(StubValidator(true)), None)
}

/// Create a test app with a custom validator and, optionally, a publisher
/// that replaces the real broker on the ingestion side. The consumer group
/// always runs against the real broker.
#[allow(dead_code)]
pub fn create_test_app_with(
    validator: Arc<dyn UserValidator>,
    publisher_override: Option<Arc<dyn EventPublisher>>,
) -> TestApp {
    let config = Config::test_default();

    let activity_store = Arc::new(InMemoryActivityStore::new());
    let recommendation_store = Arc::new(InMemoryRecommendationStore::new());

    let broker = Arc::new(InProcessBroker::new(
        config.activity_topic.clone(),
        config.channel_partitions,
        config.channel_capacity,
        config.publish_timeout,
    ));
    let event_consumer = Arc::new(ActivityEventConsumer::new(
        Arc::new(RuleBasedGenerator::new()),
        recommendation_store.clone(),
    ));
    consumer::spawn_workers(
        broker.clone(),
        event_consumer,
        &config.consumer_group,
        config.max_delivery_attempts,
    );

    let publisher: Arc<dyn EventPublisher> =
        publisher_override.unwrap_or_else(|| broker.clone() as Arc<dyn EventPublisher>);

    let activity_service = ActivityService::new(validator, activity_store.clone(), publisher);
    let recommendation_service = RecommendationService::new(recommendation_store.clone());

    let state = Arc::new(AppState {
        config,
        activity_service,
        recommendation_service,
    });

    TestApp {
        router: create_router(state.clone()),
        state,
        broker,
        activity_store,
        recommendation_store,
    }
}

/// Poll an async condition until it holds or the deadline passes.
#[allow(dead_code)]
pub async fn eventually<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for _ in 0..200 {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// JSON body for a valid activity submission.
#[allow(dead_code)]
pub fn activity_request_json(user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "type": "RUN",
        "duration": 30,
        "caloriesBurned": 300,
        "startTime": "2026-08-01T07:30:00Z",
        "additionalMetrics": { "distanceKm": 5.2 }
    })
}
