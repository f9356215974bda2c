#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use forest_watch::config::ServerConfig;
use forest_watch::http::{create_router, AppState};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable the configuration layer reads.
pub const CONFIG_ENV_VARS: [&str; 6] = [
    "FOREST_WATCH_CONFIG",
    "HOST",
    "PORT",
    "STATIC_DIR",
    "SIMULATION_SEED",
    "BODY_LIMIT_BYTES",
];

/// Runs `f` with environment variables temporarily modified.
///
/// Panic-safe (restores variables on unwind) and serialized across tests,
/// since the environment is process-global.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

/// Like [`with_scoped_env`], but first clears every configuration variable.
pub fn with_clean_config_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut all: Vec<(&str, Option<&str>)> = CONFIG_ENV_VARS.iter().map(|k| (*k, None)).collect();
    all.extend_from_slice(changes);
    with_scoped_env(&all, f)
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Router over a seeded simulator.
pub fn test_router(seed: u64) -> Router {
    let config = ServerConfig {
        seed: Some(seed),
        ..ServerConfig::default()
    };
    create_router(AppState::new(&config))
}

/// Send one request through the router and decode the JSON response body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub fn analyze_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/analyze-area")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn post_analyze(router: Router, body: &str) -> (StatusCode, Value) {
    send(router, analyze_request(body.to_string())).await
}
