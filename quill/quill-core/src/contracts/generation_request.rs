use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{GeminiModel, GenerationOptions};

/// Body the proxy accepts: `{ "prompt": ..., "options": {...} }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerationRequest {

    #[serde(default, deserialize_with = "coerce_prompt")]
    pub prompt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Model the request targets, falling back to the default model.
    pub fn model(&self) -> GeminiModel {
        self.options.as_ref().map(GenerationOptions::model).unwrap_or_default()
    }
}

fn coerce_prompt<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(prompt_to_string(value))
}

/// Coerces any JSON value into prompt text.
///
/// `null` becomes the empty string, strings are kept as-is, and every other
/// value uses its compact JSON text (`42`, `true`, `[1,2]`).
pub fn prompt_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}
