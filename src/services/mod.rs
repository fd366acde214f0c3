// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod generator;
pub mod recommendation;
pub mod user_validation;

pub use activity::ActivityService;
pub use generator::{RecommendationGenerator, RuleBasedGenerator};
pub use recommendation::RecommendationService;
pub use user_validation::{UserValidationClient, UserValidator};
