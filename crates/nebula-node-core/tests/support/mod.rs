// Shared by several test binaries; each uses a different subset.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

use nebula_node_core::input::Prompter;

pub const NODE_ID: &str = "40217527-d795-4f8d-a8d0-6f938130d77b";

/// A request the mock API received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

/// Canned responses for the two endpoints, plus a log of what was asked.
#[derive(Clone)]
pub struct MockApi {
    pub token_status: StatusCode,
    pub token_body: String,
    pub node_status: StatusCode,
    pub node_body: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            token_status: StatusCode::OK,
            token_body: json!({"refresh": "refresh-token", "access": "test-token"}).to_string(),
            node_status: StatusCode::CREATED,
            node_body: node_json("acme", "edge-1", "edge-1.acme.net").to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockApi {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    fn record(&self, path: String, headers: &HeaderMap, body: String) {
        let header_str = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let body = serde_json::from_str(&body).unwrap_or(Value::String(body));
        self.requests.lock().expect("requests lock").push(Recorded {
            path,
            authorization: header_str(header::AUTHORIZATION),
            content_type: header_str(header::CONTENT_TYPE),
            body,
        });
    }
}

pub fn node_json(organization: &str, name: &str, hostname: &str) -> Value {
    json!({
        "id": NODE_ID,
        "name": name,
        "hostname": hostname,
        "nebula_ip": "10.0.0.1",
        "api_key": "test-api-key",
        "organization": organization,
        "config": {
            "pki": {"ca": "ca-cert", "cert": "node-cert", "key": "node-key"},
            "static_host_map": {"192.168.100.1": ["203.0.113.10:4242"]},
            "lighthouse": {"am_lighthouse": false, "interval": 60, "hosts": ["192.168.100.1"]}
        }
    })
}

async fn token(State(api): State<MockApi>, headers: HeaderMap, body: String) -> (StatusCode, String) {
    api.record("/api/token/".to_string(), &headers, body);
    (api.token_status, api.token_body.clone())
}

async fn nodes(
    State(api): State<MockApi>,
    Path(org): Path<String>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    api.record(format!("/api/organizations/{}/nodes/", org), &headers, body);
    (api.node_status, api.node_body.clone())
}

/// Serve `api` on an ephemeral local port and return its base URL.
pub async fn spawn(api: MockApi) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("local addr");

    let app = Router::new()
        .route("/api/token/", post(token))
        .route("/api/organizations/{org}/nodes/", post(nodes))
        .with_state(api);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock api server");
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Replays canned answers in order.
pub struct Script {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl Script {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for Script {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }

    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        self.ask(label)
    }
}
