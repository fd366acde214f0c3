// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod recommendation;

pub use activity::{Activity, ActivityRequest, ActivityType};
pub use recommendation::Recommendation;
