use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::GeminiModel;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.9;
pub const DEFAULT_TOP_K: i64 = 32;
pub const DEFAULT_MAX_OUTPUT_TOKENS: i64 = 512;

/// Sampling parameters for one generation call.
///
/// Every field is optional on the wire. Values are forwarded verbatim, with no
/// range checks; the upstream decides what it accepts. `topK` and
/// `maxOutputTokens` keep the caller's JSON number as sent, integer or not.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<Number>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<GeminiModel>,
}

impl GenerationOptions {
    /// Fills every unset field with its default.
    pub fn resolved(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: Some(self.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
            top_p: Some(self.top_p.unwrap_or(DEFAULT_TOP_P)),
            top_k: Some(self.top_k.clone().unwrap_or_else(|| Number::from(DEFAULT_TOP_K))),
            max_output_tokens: Some(
                self.max_output_tokens
                    .clone()
                    .unwrap_or_else(|| Number::from(DEFAULT_MAX_OUTPUT_TOKENS)),
            ),
            model: Some(self.model()),
        }
    }

    pub fn model(&self) -> GeminiModel {
        self.model.unwrap_or_default()
    }

    pub fn with_model(mut self, model: GeminiModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = Some(Number::from(top_k));
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: i64) -> Self {
        self.max_output_tokens = Some(Number::from(max_output_tokens));
        self
    }
}
