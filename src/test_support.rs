use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower::ServiceExt;

use crate::api;
use crate::core::{config::Settings, state::AppState};

const OVERRIDABLE_ENV: &[&str] = &[
    "DEMS_HOST",
    "DEMS_PORT",
    "API_V1_STR",
    "PROJECT_NAME",
    "VERSION",
    "BACKEND_CORS_ORIGINS",
    "DEMS_DISPLAY_UTC_OFFSET",
    "DEMS_POLL_INTERVAL_SECONDS",
    "DEMS_LOG_JSON",
];

pub(crate) struct TestContext {
    pub(crate) app: Router,
    _guard: OwnedMutexGuard<()>,
}

pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn set_test_env() {
    std::env::set_var("DEMS_ENV", "test");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
    for key in OVERRIDABLE_ENV {
        std::env::remove_var(key);
    }
}

pub(crate) async fn setup_test_context() -> TestContext {
    let guard = env_lock().await;
    set_test_env();

    let settings = Settings::load().expect("settings");
    let app = api::router::router(AppState::new(settings));

    TestContext { app, _guard: guard }
}

pub(crate) async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
