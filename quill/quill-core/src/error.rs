use thiserror::Error;

/// Maximum number of characters of an error body carried in [`QuillError::UpstreamStatus`].
pub const ERROR_BODY_LIMIT: usize = 400;

#[derive(Debug, Error)]
pub enum QuillError {
    /// A required credential was absent from configuration.
    #[error("{0} not set")]
    MissingCredential(&'static str),

    /// The remote side answered with a non-success status.
    #[error("Request failed with status {status} {status_text}: {body}")]
    UpstreamStatus {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The response was well formed but carried no text.
    #[error("Empty response from Gemini (no content returned, or a quota/access problem upstream)")]
    EmptyContent,

    #[error("Unknown model identifier: {0}")]
    InvalidModel(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QuillError {
    /// Builds an [`QuillError::UpstreamStatus`], truncating `body` to [`ERROR_BODY_LIMIT`] characters.
    pub fn upstream_status(status: u16, status_text: impl Into<String>, body: &str) -> Self {
        QuillError::UpstreamStatus {
            status,
            status_text: status_text.into(),
            body: truncate_chars(body, ERROR_BODY_LIMIT).to_string(),
        }
    }

    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        QuillError::Transport(err.into())
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            QuillError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Cuts `text` to at most `limit` characters on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
