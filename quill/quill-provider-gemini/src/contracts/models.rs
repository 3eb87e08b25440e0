use quill_core::contracts::{GenerationOptions, GenerationRequest};
use serde::{Serialize, Deserialize};
use serde_json::Number;

/// Body of a `generateContent` call.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GeminiGenerateRequest {
    pub contents: Vec<GeminiContent>,

    #[serde(rename="generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "topP")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "topK")]
    pub top_k: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: Option<Number>,
}

impl GeminiGenerationConfig {
    /// `None` when no sampling field is set, so the upstream applies its own defaults.
    pub fn from_options(options: &GenerationOptions) -> Option<GeminiGenerationConfig> {
        let config = GeminiGenerationConfig {
            temperature: options.temperature,
            top_p: options.top_p,
            top_k: options.top_k.clone(),
            max_output_tokens: options.max_output_tokens.clone(),
        };
        if config == GeminiGenerationConfig::default() {
            None
        } else {
            Some(config)
        }
    }
}

impl From<&GenerationRequest> for GeminiGenerateRequest {
    fn from(source: &GenerationRequest) -> Self {
        GeminiGenerateRequest {
            contents: vec![GeminiContent {
                role: "user".to_owned(),
                parts: vec![GeminiPart {
                    text: source.prompt.clone(),
                }],
            }],
            generation_config: source
                .options
                .as_ref()
                .and_then(GeminiGenerationConfig::from_options),
        }
    }
}
