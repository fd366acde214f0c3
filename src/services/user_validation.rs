// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User service client for ownership validation.
//!
//! The validation call is fail-closed: a user whose existence cannot be
//! confirmed (registry unreachable, timeout, error status) is treated as
//! invalid, so an activity is never persisted on an unconfirmed owner.
//! Transport errors are logged at warn so an outage reads differently in
//! the logs than a genuine "no such user" answer.

use async_trait::async_trait;
use std::time::Duration;

/// Seam for ownership validation so tests can stub the registry.
#[async_trait]
pub trait UserValidator: Send + Sync {
    /// True when the registry confirms the user exists; false on a
    /// negative answer or any failure to get one.
    async fn validate(&self, user_id: &str) -> bool;
}

/// HTTP client for the user service's validation endpoint.
#[derive(Clone)]
pub struct UserValidationClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UserValidationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl UserValidator for UserValidationClient {
    async fn validate(&self, user_id: &str) -> bool {
        let url = format!("{}/api/users/{}/validate", self.base_url, user_id);
        tracing::debug!(user_id, "Calling user service for validation");

        let response = match self.http.get(&url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    user_id,
                    error = %err,
                    "User service unreachable, treating user as invalid"
                );
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                user_id,
                status = %response.status(),
                "User service returned error status, treating user as invalid"
            );
            return false;
        }

        match response.json::<bool>().await {
            Ok(valid) => {
                tracing::debug!(user_id, valid, "User validation answer");
                valid
            }
            Err(err) => {
                tracing::warn!(
                    user_id,
                    error = %err,
                    "User service returned malformed body, treating user as invalid"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};

    /// Serve a throwaway user service on an ephemeral port.
    async fn spawn_user_service(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: String) -> UserValidationClient {
        UserValidationClient::new(base_url, Duration::from_millis(500))
    }

    #[tokio::test]
    async fn test_validate_true_and_false_answers() {
        let router = Router::new().route(
            "/api/users/{user_id}/validate",
            get(|axum::extract::Path(user_id): axum::extract::Path<String>| async move {
                axum::Json(user_id == "known")
            }),
        );
        let base = spawn_user_service(router).await;

        assert!(client(base.clone()).validate("known").await);
        assert!(!client(base).validate("stranger").await);
    }

    #[tokio::test]
    async fn test_error_status_fails_closed() {
        let router = Router::new().route(
            "/api/users/{user_id}/validate",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_user_service(router).await;

        assert!(!client(base).validate("u1").await);
    }

    #[tokio::test]
    async fn test_unreachable_service_fails_closed() {
        // Nothing listens here; connection is refused immediately.
        assert!(!client("http://127.0.0.1:1".to_string()).validate("u1").await);
    }

    #[tokio::test]
    async fn test_malformed_body_fails_closed() {
        let router = Router::new().route(
            "/api/users/{user_id}/validate",
            get(|| async { "not json at all" }),
        );
        let base = spawn_user_service(router).await;

        assert!(!client(base).validate("u1").await);
    }
}
