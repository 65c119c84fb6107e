//! Health check handlers

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Which question store is serving requests
    pub store: &'static str,
}

/// Report the service version and whether the question store answers
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.questions();

    let (status, label) = match store.ping().await {
        Ok(()) => (StatusCode::OK, "healthy"),
        Err(e) => {
            tracing::warn!(error = %e, backend = store.backend(), "Question store is unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            store: store.backend(),
        }),
    )
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        db::{store::MockQuestionStore, StoreError},
        middleware::StaticTokenAuthorizer,
    };

    async fn health_of(store: MockQuestionStore) -> (StatusCode, serde_json::Value) {
        let state = AppState::new(Arc::new(store), Arc::new(StaticTokenAuthorizer::new("t")));
        let app = routes().with_state(state);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let mut store = MockQuestionStore::new();
        store.expect_ping().returning(|| Ok(()));
        store.expect_backend().return_const("postgres");

        let (status, body) = health_of(store).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "postgres");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_degraded_when_store_unreachable() {
        let mut store = MockQuestionStore::new();
        store
            .expect_ping()
            .returning(|| Err(StoreError::Backend("connection refused".to_string())));
        store.expect_backend().return_const("postgres");

        let (status, body) = health_of(store).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
    }
}
