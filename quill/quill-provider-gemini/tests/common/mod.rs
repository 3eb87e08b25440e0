use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    Router,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct StubUpstream {
    status: StatusCode,
    body: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubUpstream {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn record(
    State(stub): State<Arc<StubUpstream>>,
    uri: Uri,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    stub.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).to_string(),
    });
    (stub.status, stub.body.clone())
}

/// Serves `body` with `status` for every request and returns the base URL.
pub async fn spawn_stub(status: StatusCode, body: &str) -> (String, Arc<StubUpstream>) {
    let stub = Arc::new(StubUpstream {
        status,
        body: body.to_string(),
        calls: Mutex::new(Vec::new()),
    });
    let app = Router::new().fallback(record).with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v1beta", addr), stub)
}
