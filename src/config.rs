// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Everything the pipeline needs is passed in explicitly at construction
//! time; there are no process-wide singletons.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Base URL of the user service (ownership validation)
    pub user_service_url: String,
    /// Ceiling for a single validation call
    pub validation_timeout: Duration,
    /// Topic carrying activity-created events
    pub activity_topic: String,
    /// Consumer group name for the recommendation pipeline
    pub consumer_group: String,
    /// Number of partitions (and consumer workers) on the event channel
    pub channel_partitions: usize,
    /// Per-partition buffer before publishers feel backpressure
    pub channel_capacity: usize,
    /// Ceiling for a single publish under backpressure
    pub publish_timeout: Duration,
    /// Delivery attempts per event before dead-lettering
    pub max_delivery_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            user_service_url: env::var("USER_SERVICE_URL")
                .map_err(|_| ConfigError::Missing("USER_SERVICE_URL"))?,
            validation_timeout: Duration::from_millis(parse_env("VALIDATION_TIMEOUT_MS", 2_000)),
            activity_topic: env::var("ACTIVITY_TOPIC")
                .unwrap_or_else(|_| "activity-events".to_string()),
            consumer_group: env::var("CONSUMER_GROUP")
                .unwrap_or_else(|_| "activity-processor-group".to_string()),
            channel_partitions: parse_env("CHANNEL_PARTITIONS", 4) as usize,
            channel_capacity: parse_env("CHANNEL_CAPACITY", 1_024) as usize,
            publish_timeout: Duration::from_millis(parse_env("PUBLISH_TIMEOUT_MS", 1_000)),
            max_delivery_attempts: parse_env("MAX_DELIVERY_ATTEMPTS", 3) as u32,
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            user_service_url: "http://localhost:8081".to_string(),
            validation_timeout: Duration::from_millis(500),
            activity_topic: "activity-events".to_string(),
            consumer_group: "activity-processor-group".to_string(),
            channel_partitions: 2,
            channel_capacity: 64,
            publish_timeout: Duration::from_millis(200),
            max_delivery_attempts: 3,
        }
    }
}

fn parse_env(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("USER_SERVICE_URL", "http://localhost:9000");
        env::set_var("CHANNEL_PARTITIONS", "8");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.user_service_url, "http://localhost:9000");
        assert_eq!(config.channel_partitions, 8);
        assert_eq!(config.port, 8080);
        assert_eq!(config.activity_topic, "activity-events");
    }
}
