#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};

use loan_admin_client::{ApiClient, MemorySessionStore, SessionStore};

/// Path prefix the stub mounts the API under, like a real deployment.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone)]
struct CannedReply {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

type Routes = HashMap<(String, String), CannedReply>;

#[derive(Clone, Default)]
struct StubState {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process backend that records every request and answers with canned bodies.
pub struct StubBackend {
    pub base_url: String,
    state: StubState,
}

impl StubBackend {
    pub async fn start() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind stub backend")?;

        let state = StubState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}{}", port, API_PREFIX),
            state,
        })
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.respond_with_headers(method, path, status, body, &[]);
    }

    /// Canned reply that also sends extra response headers (e.g. `set-cookie`).
    pub fn respond_with_headers(&self, method: &str, path: &str, status: u16, body: &str, headers: &[(&str, &str)]) {
        let reply = CannedReply {
            status,
            body: body.to_string(),
            headers: headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        };
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), reply);
    }

    /// 200 envelope with `data`.
    pub fn ok(&self, method: &str, path: &str, data: Value) {
        self.respond(
            method,
            path,
            200,
            json!({ "success": true, "status": 200, "message": "OK", "data": data }),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request reached the stub")
    }

    pub fn client(&self, session: Arc<dyn SessionStore>) -> ApiClient {
        ApiClient::new(self.base_url.clone(), session).expect("stub base URL is valid")
    }

    pub fn anonymous_client(&self) -> ApiClient {
        self.client(Arc::new(MemorySessionStore::new()))
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();

    let recorded_headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        headers: recorded_headers,
        body,
    });

    let canned = state
        .routes
        .lock()
        .unwrap()
        .get(&(method.to_string(), path.clone()))
        .cloned();

    match canned {
        Some(reply) => {
            let mut response = (
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                [(header::CONTENT_TYPE, "application/json")],
                reply.body,
            )
                .into_response();
            for (name, value) in reply.headers {
                let name = HeaderName::from_bytes(name.as_bytes()).expect("valid stub header name");
                let value = HeaderValue::from_str(&value).expect("valid stub header value");
                response.headers_mut().append(name, value);
            }
            response
        }
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            json!({
                "success": false,
                "status": 404,
                "message": format!("no stub for {} {}", method, path)
            })
            .to_string(),
        )
            .into_response(),
    }
}
