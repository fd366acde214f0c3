// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fittrack: activity recording with asynchronously derived recommendations.
//!
//! This crate provides the activity ingestion service (owner validation,
//! persistence, best-effort event publish) and the downstream consumer
//! that turns activity events into stored recommendations.

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use services::{ActivityService, RecommendationService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activity_service: ActivityService,
    pub recommendation_service: RecommendationService,
}
