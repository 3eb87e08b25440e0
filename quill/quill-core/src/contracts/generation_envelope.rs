use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuillError;

/*
{
    "candidates": [
        {
            "content": {
                "role": "model",
                "parts": [ { "text": "Hello there!" } ]
            },
            "finishReason": "STOP"
        }
    ],
    "usageMetadata": {
        "promptTokenCount": 4,
        "candidatesTokenCount": 3,
        "totalTokenCount": 7
    },
    "modelVersion": "gemini-1.5-flash"
}
*/

/// Reads `candidates[0].content.parts[0].text` and trims it.
///
/// A missing link anywhere in the chain, or a link of the wrong JSON type,
/// yields the empty string.
pub fn extract_text(envelope: &Value) -> String {
    envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Turns an upstream error envelope (`{"error": {"code", "status", "message"}}`)
/// into [`QuillError::UpstreamStatus`].
///
/// The proxy relays these with a 200, so the status only survives inside the body.
pub fn envelope_error(envelope: &Value) -> Option<QuillError> {
    let error = envelope.get("error")?;
    let code = error
        .get("code")
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())?;
    let status = error.get("status").and_then(Value::as_str).unwrap_or_default();
    let message = error.get("message").and_then(Value::as_str).unwrap_or_default();
    Some(QuillError::upstream_status(code, status, message))
}

/// Lenient typed view of the upstream envelope, used for diagnostics only.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationEnvelope {
    #[serde(default)]
    pub candidates: Vec<EnvelopeCandidate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<EnvelopeUsage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeCandidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<EnvelopeContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct EnvelopeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default)]
    pub parts: Vec<EnvelopePart>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct EnvelopePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeUsage {
    pub prompt_token_count: Option<u64>,
    pub candidates_token_count: Option<u64>,
    pub total_token_count: Option<u64>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerationEnvelope {
    /// Builds the view from a raw envelope. A shape mismatch gives an empty view.
    pub fn from_value(value: &Value) -> GenerationEnvelope {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }

    pub fn usage(&self) -> Option<Value> {
        self.usage_metadata
            .as_ref()
            .and_then(|u| serde_json::to_value(u).ok())
    }
}
