use async_trait::async_trait;
use quill_core::{
    ApiKey,
    GenerativeUpstream,
    QuillError,
    contracts::{GeminiModel, GenerationRequest},
};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::contracts::GeminiGenerateRequest;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Calls `generateContent` with the API key passed as the `key` query parameter.
#[derive(Clone)]
pub struct GeminiUpstream {
    api_url: String,
    api_key: ApiKey,
    client: reqwest::Client,
}

impl GeminiUpstream {
    pub fn new(api_url: impl Into<String>, api_key: ApiKey) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint for `model`, without the credential.
    pub fn endpoint(&self, model: GeminiModel) -> String {
        format!("{}/models/{}:generateContent", self.api_url, model)
    }
}

#[async_trait]
impl GenerativeUpstream for GeminiUpstream {
    async fn generate_content(&self, request: &GenerationRequest) -> Result<Value, QuillError> {
        let model = request.model();
        let url = self.endpoint(model);
        let body = GeminiGenerateRequest::from(request);

        tracing::debug!(%model, prompt_chars = request.prompt.chars().count(), "forwarding prompt upstream");

        // without_url() keeps the key out of error messages
        let res = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose())])
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| QuillError::transport(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%model, status = status.as_u16(), "upstream answered with a non-success status");
        }

        let payload = res
            .text()
            .await
            .map_err(|e| QuillError::transport(e.without_url()))?;
        let envelope: Value = serde_json::from_str(&payload)?;

        Ok(envelope)
    }
}
