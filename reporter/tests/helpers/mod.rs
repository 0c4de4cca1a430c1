#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const RESULT_PATH: &str = "/api/sandbox/result";

/// A request received by the mock results API.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    delay: Option<Duration>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Stand-in for the results API, listening on an ephemeral local port.
pub struct MockBackend {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockBackend {
    pub async fn start(status: StatusCode) -> Self {
        Self::start_with_delay(status, None).await
    }

    pub async fn start_with_delay(status: StatusCode, delay: Option<Duration>) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            delay,
            captured: captured.clone(),
        };

        let app = Router::new()
            .route(RESULT_PATH, post(record_result))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, captured }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, RESULT_PATH)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

async fn record_result(State(state): State<MockState>, headers: HeaderMap, body: String) -> StatusCode {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.captured.lock().unwrap().push(CapturedRequest {
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    state.status
}

/// An endpoint on a port nobody is listening on.
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, RESULT_PATH)
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub const METADATA: &str = r#"{ "uniqueCode": "STU-001", "secureHash": "abc123", "pId": 42 }"#;

pub const PARTIAL_REPORT: &str = r#"{
  "results": [
    {
      "suites": [
        {
          "title": "Exercise",
          "tests": [
            { "title": "X - marks 3", "state": "passed", "err": {} },
            { "title": "Y - marks 1", "state": "failed", "err": { "message": "timeout" } }
          ]
        }
      ]
    }
  ]
}"#;
