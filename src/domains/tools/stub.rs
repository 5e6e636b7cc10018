//! In-process stub of the upstream HTTP APIs, for tests.
//!
//! Answers every request with one canned response and records what it
//! received. Point both base URLs of a [`Config`] at it with
//! [`StubUpstream::config`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::core::config::Config;

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running stub server.
pub struct StubUpstream {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubUpstream {
    /// Serve `body` as JSON with the given status.
    pub async fn json(status: u16, body: Value) -> Self {
        Self::start(status, "application/json", body.to_string(), Duration::ZERO).await
    }

    /// Serve a plain-text body with the given status.
    pub async fn text(status: u16, body: &str) -> Self {
        Self::start(status, "text/plain", body.to_string(), Duration::ZERO).await
    }

    /// Serve `body` as JSON, but only after waiting `delay`.
    pub async fn slow(delay: Duration, body: Value) -> Self {
        Self::start(200, "application/json", body.to_string(), delay).await
    }

    async fn start(
        status: u16,
        content_type: &'static str,
        body: String,
        delay: Duration,
    ) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).expect("valid status"),
            content_type,
            body,
            delay,
            requests: requests.clone(),
        };

        let app = Router::new().fallback(record).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Configuration whose upstreams both point at this stub. The listings
    /// API is mounted under `/api`, like the real one.
    pub fn config(&self, api_key: Option<&str>) -> Config {
        let mut config = Config::default();
        config.upstream.listings_base_url = format!("{}/api", self.base_url);
        config.upstream.address_base_url = self.base_url.clone();
        config.credentials.moteur_immo_api_key = api_key.map(str::to_string);
        config
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub lock").clone()
    }
}

/// Configuration whose upstreams refuse connections.
pub async fn unreachable_config() -> Config {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);

    let mut config = Config::default();
    config.upstream.listings_base_url = format!("http://{}/api", addr);
    config.upstream.address_base_url = format!("http://{}", addr);
    config.credentials.moteur_immo_api_key = Some("secret".to_string());
    config
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let recorded = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().expect("stub lock").push(recorded);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body,
    )
}
