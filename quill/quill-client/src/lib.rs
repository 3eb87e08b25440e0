//! Caller-side helper for the Quill proxy.
//!
//! [`QuillClient`] posts `{ "prompt": ..., "options": {...} }` to the proxy path and
//! returns the first generated text from the envelope the proxy relays back.
//!
//! # Calling Gemini directly
//!
//! An earlier design skipped the proxy: the caller read an API key from its own
//! build-time environment, sent the full `generateContent` body straight to
//! `https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent?key=...`
//! and failed with "API key is not set" before any network call when the key was
//! missing. That ships the credential to every caller, so it is not provided here.
//! Route every call through the proxy instead.
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;

use quill_core::{
    QuillError,
    TextGenerator,
    contracts::{envelope_error, extract_text, GenerationEnvelope, GenerationOptions, GenerationRequest},
    logging::IQuillLogger,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROXY_PATH: &str = "/api/gemini";

/// Configuration for the proxied client.
#[derive(Debug, Clone)]
pub struct QuillClientConfig {
    /// Origin the proxy is served from (e.g., "http://localhost:3000").
    pub base_url: String,
    /// Route of the proxy handler on that origin.
    pub proxy_path: String,
    /// Optional logger for requests and responses.
    pub logger: Option<Arc<dyn IQuillLogger>>,
}

impl Default for QuillClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy_path: DEFAULT_PROXY_PATH.to_string(),
            logger: None,
        }
    }
}

/// Sends prompts through the proxy. Holds no per-call state.
pub struct QuillClient {
    config: QuillClientConfig,
    client: reqwest::Client,
}

impl QuillClient {
    pub fn new(config: QuillClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = self.config.proxy_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Generates text with the default options.
    pub async fn generate(&self, prompt: &str) -> Result<String, QuillError> {
        self.generate_text(prompt, &GenerationOptions::default()).await
    }

    fn fail(&self, model: &str, err: QuillError) -> QuillError {
        if let Some(logger) = &self.config.logger {
            logger.log_failure(model, &err);
        }
        err
    }
}

#[async_trait]
impl TextGenerator for QuillClient {
    async fn generate_text(&self, prompt: &str, options: &GenerationOptions) -> Result<String, QuillError> {
        let options = options.resolved();
        let model = options.model().to_string();
        let request = GenerationRequest::new(prompt).with_options(options);

        if let Some(logger) = &self.config.logger {
            logger.log_request(
                &model,
                serde_json::to_value(&request).unwrap_or(Value::Null),
            );
        }

        let res = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.fail(&model, QuillError::transport(e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .await
                .map_err(|e| self.fail(&model, QuillError::transport(e)))?;
            let err = QuillError::upstream_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                &body,
            );
            return Err(self.fail(&model, err));
        }

        let payload = res
            .text()
            .await
            .map_err(|e| self.fail(&model, QuillError::transport(e)))?;
        let envelope: Value = serde_json::from_str(&payload)
            .map_err(|e| self.fail(&model, QuillError::from(e)))?;
        let view = GenerationEnvelope::from_value(&envelope);

        let text = extract_text(&envelope);
        let upstream_error = if text.is_empty() { envelope_error(&envelope) } else { None };

        if let Some(logger) = &self.config.logger {
            logger.log_response(&model, envelope, view.usage());
        }

        if text.is_empty() {
            if let Some(err) = upstream_error {
                return Err(self.fail(&model, err));
            }
            tracing::warn!(
                model = %model,
                finish_reason = view.finish_reason().unwrap_or("none"),
                block_reason = view.block_reason().unwrap_or("none"),
                "proxy returned no text"
            );
            return Err(self.fail(&model, QuillError::EmptyContent));
        }

        Ok(text)
    }
}
