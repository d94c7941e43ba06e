use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const COMPLETED_HELLO_WORLD: &str =
    r#"{"id":"job123","status":"completed","text":"hello world"}"#;

/// Canned responses as `(status, body)` pairs. The last poll response repeats.
#[derive(Clone)]
pub struct MockAssemblyAiScript {
    pub upload: (u16, &'static str),
    pub create: (u16, &'static str),
    pub polls: Vec<(u16, &'static str)>,
}

impl Default for MockAssemblyAiScript {
    fn default() -> Self {
        Self {
            upload: (200, r#"{"upload_url":"https://cdn.assemblyai.test/upload/abc"}"#),
            create: (200, r#"{"id":"job123","status":"queued"}"#),
            polls: vec![(200, COMPLETED_HELLO_WORLD)],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CapturedRequests {
    pub authorization: Vec<Option<String>>,
    pub upload_bodies: Vec<Vec<u8>>,
    pub create_bodies: Vec<serde_json::Value>,
    pub polled_ids: Vec<String>,
}

struct MockState {
    script: MockAssemblyAiScript,
    captured: Arc<Mutex<CapturedRequests>>,
}

pub struct MockAssemblyAi {
    pub base_url: String,
    captured: Arc<Mutex<CapturedRequests>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockAssemblyAi {
    pub async fn start(script: MockAssemblyAiScript) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let captured = Arc::new(Mutex::new(CapturedRequests::default()));

        let state = Arc::new(MockState {
            script,
            captured: Arc::clone(&captured),
        });

        let app = Router::new()
            .route("/v2/upload", post(upload))
            .route("/v2/transcript", post(create_transcript))
            .route("/v2/transcript/{id}", get(poll_transcript))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{}/v2", addr),
            captured,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn captured(&self) -> CapturedRequests {
        self.captured.lock().unwrap().clone()
    }
}

impl Drop for MockAssemblyAi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            tx.send(()).ok();
        }
    }
}

fn canned(status: u16, body: &'static str) -> Response {
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn upload(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    {
        let mut captured = state.captured.lock().unwrap();
        captured.authorization.push(authorization(&headers));
        captured.upload_bodies.push(body.to_vec());
    }
    let (status, body) = state.script.upload;
    canned(status, body)
}

async fn create_transcript(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    {
        let mut captured = state.captured.lock().unwrap();
        captured.authorization.push(authorization(&headers));
        captured
            .create_bodies
            .push(serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null));
    }
    let (status, body) = state.script.create;
    canned(status, body)
}

async fn poll_transcript(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let attempt = {
        let mut captured = state.captured.lock().unwrap();
        captured.authorization.push(authorization(&headers));
        captured.polled_ids.push(id);
        captured.polled_ids.len() - 1
    };
    let polls = &state.script.polls;
    let (status, body) = polls[attempt.min(polls.len() - 1)];
    canned(status, body)
}
