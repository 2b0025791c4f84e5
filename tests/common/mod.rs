#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};

use waitlist::config::Config;
use waitlist::dispatch::{
    DispatchError, DispatchEvent, DispatchOutcome, DispatchStatus, Dispatcher,
};

pub const TEST_TOKEN: &str = "test-github-token";
pub const DISPATCH_PATH: &str = "/repos/test/waitlist-data/dispatches";

/// How the fake dispatcher answers.
#[derive(Debug, Clone, Copy)]
pub enum FakeMode {
    Accept,
    Reject(u16),
    Unreachable,
}

/// In-memory stand-in for the dispatch trigger. Records every event it sees.
pub struct FakeDispatcher {
    mode: FakeMode,
    events: Mutex<Vec<DispatchEvent>>,
}

impl FakeDispatcher {
    pub fn new(mode: FakeMode) -> Self {
        Self {
            mode,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<DispatchEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for FakeDispatcher {
    fn name(&self) -> &str {
        "fake"
    }

    async fn dispatch(&self, event: &DispatchEvent) -> Result<DispatchOutcome, DispatchError> {
        self.events.lock().unwrap().push(event.clone());

        match self.mode {
            FakeMode::Accept => Ok(DispatchOutcome {
                status: DispatchStatus::Accepted,
                status_code: 204,
                body: String::new(),
            }),
            FakeMode::Reject(code) => Ok(DispatchOutcome {
                status: DispatchStatus::from_status_code(code),
                status_code: code,
                body: "nope".to_string(),
            }),
            FakeMode::Unreachable => Err(DispatchError::Transport("connection refused".to_string())),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        github_token: TEST_TOKEN.to_string(),
        dispatch_url: "http://127.0.0.1:9/unused".to_string(),
        dispatch_timeout: Duration::from_secs(5),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 16_384,
        allowed_origin: HeaderValue::from_static("*"),
        log_level: "warn".to_string(),
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub dispatcher: Arc<FakeDispatcher>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON body to the relay, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/waitlist"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with an explicit content type, return (body, status).
    pub async fn submit_raw(&self, content_type: Option<&str>, body: &str) -> (Value, StatusCode) {
        let mut req = self.client.post(self.url("/api/waitlist")).body(body.to_string());
        if let Some(ct) = content_type {
            req = req.header("content-type", ct);
        }
        let resp = req.send().await.expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

async fn serve(app: Router) -> SocketAddr {
    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

fn test_client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Spawn the relay backed by a fake dispatcher.
pub async fn spawn_app(mode: FakeMode) -> TestApp {
    spawn_app_with_config(mode, test_config()).await
}

pub async fn spawn_app_with_config(mode: FakeMode, config: Config) -> TestApp {
    let dispatcher = Arc::new(FakeDispatcher::new(mode));
    let app = waitlist::build_app_with_dispatcher(config, dispatcher.clone());
    let addr = serve(app).await;

    TestApp {
        addr,
        client: test_client(),
        dispatcher,
    }
}

/// Spawn the relay wired to the real GitHub dispatcher, pointed at `dispatch_url`.
pub async fn spawn_github_app(dispatch_url: &str) -> (SocketAddr, Client) {
    let mut config = test_config();
    config.dispatch_url = dispatch_url.to_string();
    let app = waitlist::build_app(config).expect("Failed to build app");
    (serve(app).await, test_client())
}

/// A request received by the fake GitHub API.
#[derive(Debug, Clone)]
pub struct ReceivedDispatch {
    pub headers: HeaderMap,
    pub body: Value,
}

struct FakeGithubState {
    status: StatusCode,
    delay: Option<Duration>,
    received: Mutex<Vec<ReceivedDispatch>>,
}

/// Local server standing in for `POST /repos/{owner}/{repo}/dispatches`.
pub struct FakeGithub {
    pub addr: SocketAddr,
    state: Arc<FakeGithubState>,
}

impl FakeGithub {
    pub fn dispatch_url(&self) -> String {
        format!("http://{}{}", self.addr, DISPATCH_PATH)
    }

    pub fn received(&self) -> Vec<ReceivedDispatch> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn fake_dispatches(
    State(state): State<Arc<FakeGithubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedDispatch { headers, body });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    let body = if state.status.is_success() {
        String::new()
    } else {
        json!({ "message": "Validation Failed" }).to_string()
    };
    (state.status, body)
}

pub async fn spawn_fake_github(status: StatusCode, delay: Option<Duration>) -> FakeGithub {
    let state = Arc::new(FakeGithubState {
        status,
        delay,
        received: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route(DISPATCH_PATH, post(fake_dispatches))
        .with_state(state.clone());

    FakeGithub {
        addr: serve(app).await,
        state,
    }
}
