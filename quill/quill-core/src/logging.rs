use serde_json::Value;
use std::fmt::Debug;

use crate::error::QuillError;

/// Observer for generation calls. Implementations must never receive credentials.
pub trait IQuillLogger: Send + Sync + Debug {
    fn log_request(
        &self,
        model: &str,
        request_json: Value,
    );
    fn log_response(
        &self,
        model: &str,
        response_json: Value,
        usage: Option<Value>,
    );
    fn log_failure(
        &self,
        model: &str,
        error: &QuillError,
    );
}

#[derive(Debug, Default)]
pub struct TracingQuillLogger;

impl IQuillLogger for TracingQuillLogger {
    fn log_request(
        &self,
        model: &str,
        request_json: Value,
    ) {
        tracing::debug!(target: "quill", model, request = %request_json, "generation request");
    }
    fn log_response(
        &self,
        model: &str,
        response_json: Value,
        usage: Option<Value>,
    ) {
        let usage_str = usage.map(|u| u.to_string()).unwrap_or_else(|| "none".to_string());
        tracing::debug!(target: "quill", model, response = %response_json, usage = %usage_str, "generation response");
    }
    fn log_failure(
        &self,
        model: &str,
        error: &QuillError,
    ) {
        tracing::warn!(target: "quill", model, error = %error, "generation failed");
    }
}
