//! Health & readiness handlers.
//!
//! - GET /healthz  -> simple liveness ("ok")
//! - GET /readyz   -> readiness that checks the configured bucket is reachable

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// `GET /healthz`
///
/// Very small liveness probe — always returns 200 OK with a plain JSON body.
/// This endpoint should be cheap and never perform I/O.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

/// `GET /readyz`
///
/// Probes the configured bucket through the shared store client.
/// HTTP 200 when the probe passes, HTTP 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let bucket_check = match state.store.probe(&state.bucket).await {
        Ok(()) => CheckStatus {
            ok: true,
            error: None,
        },
        Err(e) => {
            warn!("readiness probe failed: {}", e);
            CheckStatus {
                ok: false,
                error: Some(e.to_string()),
            }
        }
    };

    let overall_ok = bucket_check.ok;
    let mut checks = HashMap::new();
    checks.insert("bucket", bucket_check);

    let body = ReadyResponse {
        status: if overall_ok {
            "ok".into()
        } else {
            "error".into()
        },
        checks,
    };

    let status = if overall_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    checks: HashMap<&'static str, CheckStatus>,
}

#[derive(Serialize)]
struct CheckStatus {
    ok: bool,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::util::ServiceExt;

    use super::*;
    use crate::{config::Function, routes::routes::routes, services::memory_store::MemoryStore};

    async fn get(store: Arc<MemoryStore>, path: &str) -> (StatusCode, Value) {
        let app = routes().with_state(AppState::new(store, "free-accounts", Function::All));
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn healthz_never_touches_storage() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = get(store.clone(), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(store.total_calls(), 0);
    }

    #[tokio::test]
    async fn readyz_reports_bucket_probe() {
        let store = Arc::new(MemoryStore::new());
        let (status, body) = get(store.clone(), "/readyz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["bucket"]["ok"], true);
        assert_eq!(store.probe_calls(), 1);

        let (status, body) = get(Arc::new(MemoryStore::new().failing_probe()), "/readyz").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
        assert!(body["checks"]["bucket"]["error"]
            .as_str()
            .unwrap()
            .contains("free-accounts"));
    }
}
