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
    pub body: String,
}

pub struct StubProxy {
    status: StatusCode,
    body: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProxy {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn record(State(stub): State<Arc<StubProxy>>, uri: Uri, body: Bytes) -> (StatusCode, String) {
    stub.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_string(),
        body: String::from_utf8_lossy(&body).to_string(),
    });
    (stub.status, stub.body.clone())
}

/// Answers every request with `status` and `body`; returns the origin URL.
pub async fn spawn_stub(status: StatusCode, body: &str) -> (String, Arc<StubProxy>) {
    let stub = Arc::new(StubProxy {
        status,
        body: body.to_string(),
        calls: Mutex::new(Vec::new()),
    });
    let app = Router::new().fallback(record).with_state(stub.clone());
    (serve(app).await, stub)
}

pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
