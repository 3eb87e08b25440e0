use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuillError;

/// Model identifiers the proxy is allowed to forward to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeminiModel {
    #[default]
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
}

impl GeminiModel {
    pub const ALL: [GeminiModel; 4] = [
        GeminiModel::Gemini15Flash,
        GeminiModel::Gemini15Pro,
        GeminiModel::Gemini20Flash,
        GeminiModel::Gemini25Flash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Gemini15Flash => "gemini-1.5-flash",
            GeminiModel::Gemini15Pro => "gemini-1.5-pro",
            GeminiModel::Gemini20Flash => "gemini-2.0-flash",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
        }
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeminiModel {
    type Err = QuillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeminiModel::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| QuillError::InvalidModel(s.to_string()))
    }
}
