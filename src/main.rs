// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fittrack API Server
//!
//! Records user fitness activities, validates ownership against the user
//! service, and derives recommendations asynchronously from the activity
//! event stream.

use fittrack::{
    config::Config,
    events::{consumer, ActivityEventConsumer, InProcessBroker},
    services::{ActivityService, RecommendationService, RuleBasedGenerator, UserValidationClient},
    store::{InMemoryActivityStore, InMemoryRecommendationStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Fittrack API");

    // Stores. The in-memory reference implementations back this binary;
    // real databases slot in behind the same traits.
    let activity_store = Arc::new(InMemoryActivityStore::new());
    let recommendation_store = Arc::new(InMemoryRecommendationStore::new());

    // Event channel and the consumer group draining it.
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
    tracing::info!(
        topic = %config.activity_topic,
        group = %config.consumer_group,
        partitions = config.channel_partitions,
        "Event consumer started"
    );

    // User service validation client.
    let user_validator = Arc::new(UserValidationClient::new(
        config.user_service_url.clone(),
        config.validation_timeout,
    ));
    tracing::info!(url = %config.user_service_url, "User validation client initialized");

    let activity_service =
        ActivityService::new(user_validator, activity_store, broker.clone());
    let recommendation_service = RecommendationService::new(recommendation_store);

    let state = Arc::new(AppState {
        config: config.clone(),
        activity_service,
        recommendation_service,
    });

    let app = fittrack::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fittrack=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
