use async_trait::async_trait;
use serde_json::Value;

use crate::contracts::{GenerationOptions, GenerationRequest};
pub mod contracts;
pub mod credential;
pub mod error;
pub mod logging;

pub use credential::ApiKey;
pub use error::QuillError;

/// Turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str, options: &GenerationOptions) -> Result<String, QuillError>;
}

/// The one outbound call the proxy makes per request.
///
/// Implementations return the upstream envelope untouched, whatever status the
/// upstream answered with.
#[mockall::automock]
#[async_trait]
pub trait GenerativeUpstream: Send + Sync {
    async fn generate_content(&self, request: &GenerationRequest) -> Result<Value, QuillError>;
}
