use std::sync::Arc;

use quill_core::{ApiKey, GenerativeUpstream, QuillError};
use quill_provider_gemini::gemini_client::{GeminiUpstream, DEFAULT_API_URL};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_URL_VAR: &str = "GEMINI_API_URL";
pub const BIND_ADDR_VAR: &str = "QUILL_BIND_ADDR";
pub const PROXY_PATH_VAR: &str = "QUILL_PROXY_PATH";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PROXY_PATH: &str = "/api/gemini";

/// Process-wide proxy settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: Option<ApiKey>,
    pub api_url: String,
    pub bind_addr: String,
    pub proxy_path: String,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_VAR).and_then(ApiKey::new);
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let bind_addr = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let proxy_path = lookup(PROXY_PATH_VAR)
            .filter(|v| !v.is_empty())
            .map(|p| normalize_path(&p))
            .unwrap_or_else(|| DEFAULT_PROXY_PATH.to_string());

        Self {
            api_key,
            api_url,
            bind_addr,
            proxy_path,
        }
    }

    pub fn require_api_key(&self) -> Result<&ApiKey, QuillError> {
        self.api_key.as_ref().ok_or(QuillError::MissingCredential(API_KEY_VAR))
    }

    /// Upstream client, or `None` when the credential is missing.
    pub fn upstream(&self) -> Option<Arc<dyn GenerativeUpstream>> {
        let key = self.require_api_key().ok()?.clone();
        Some(Arc::new(GeminiUpstream::new(self.api_url.clone(), key)))
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
