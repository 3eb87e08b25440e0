use quill_core::contracts::{
    envelope_error, extract_text, GeminiModel, GenerationEnvelope, GenerationOptions, GenerationRequest,
};
use quill_core::error::{truncate_chars, ERROR_BODY_LIMIT};
use quill_core::{ApiKey, QuillError};
use serde_json::{from_value, json, Number};

#[test]
fn test_extract_trims_first_text() {
    let envelope = json!({"candidates":[{"content":{"parts":[{"text":"  Hello  "}]}}]});
    assert_eq!(extract_text(&envelope), "Hello");
}

#[test]
fn test_extract_missing_links_yield_empty() {
    assert_eq!(extract_text(&json!({})), "");
    assert_eq!(extract_text(&json!({"candidates": []})), "");
    assert_eq!(extract_text(&json!({"candidates": [{}]})), "");
    assert_eq!(extract_text(&json!({"candidates": [{"content": {"parts": []}}]})), "");
    assert_eq!(extract_text(&json!({"candidates": [{"content": {"parts": [{}]}}]})), "");
    assert_eq!(extract_text(&json!({"candidates": "nope"})), "");
    assert_eq!(extract_text(&json!({"candidates": [{"content": {"parts": [{"text": 5}]}}]})), "");
}

#[test]
fn test_extract_only_reads_first_candidate_and_part() {
    let envelope = json!({
        "candidates": [
            {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
            {"content": {"parts": [{"text": "other"}]}}
        ]
    });
    assert_eq!(extract_text(&envelope), "first");
}

#[test]
fn test_prompt_coercion() {
    let req: GenerationRequest = from_value(json!({})).unwrap();
    assert_eq!(req.prompt, "");

    let req: GenerationRequest = from_value(json!({"prompt": null})).unwrap();
    assert_eq!(req.prompt, "");

    let req: GenerationRequest = from_value(json!({"prompt": 42})).unwrap();
    assert_eq!(req.prompt, "42");

    let req: GenerationRequest = from_value(json!({"prompt": true})).unwrap();
    assert_eq!(req.prompt, "true");

    let req: GenerationRequest = from_value(json!({"prompt": "write a haiku"})).unwrap();
    assert_eq!(req.prompt, "write a haiku");
    assert!(req.options.is_none());
    assert_eq!(req.model(), GeminiModel::Gemini15Flash);
}

#[test]
fn test_request_with_options() {
    let req: GenerationRequest = from_value(json!({
        "prompt": "hi",
        "options": {"temperature": 1.5, "topK": -3, "model": "gemini-1.5-pro"}
    }))
    .unwrap();

    let options = req.options.as_ref().expect("Missing options");
    assert_eq!(options.temperature, Some(1.5));
    assert_eq!(options.top_k, Some(Number::from(-3)));
    assert_eq!(options.top_p, None);
    assert_eq!(req.model(), GeminiModel::Gemini15Pro);
}

#[test]
fn test_fractional_counts_are_kept_as_sent() {
    let req: GenerationRequest = from_value(json!({
        "prompt": "hi",
        "options": {"topK": 32.0, "maxOutputTokens": 512.5}
    }))
    .unwrap();

    let options = req.options.expect("Missing options");
    assert_eq!(options.top_k.as_ref().and_then(Number::as_f64), Some(32.0));
    assert!(options.top_k.as_ref().unwrap().is_f64());
    assert_eq!(options.max_output_tokens.as_ref().and_then(Number::as_f64), Some(512.5));

    let resolved = serde_json::to_value(options.resolved()).unwrap();
    assert_eq!(resolved["topK"], json!(32.0));
    assert_eq!(resolved["maxOutputTokens"], json!(512.5));
}

#[test]
fn test_unknown_model_is_rejected() {
    let result: Result<GenerationRequest, _> =
        from_value(json!({"prompt": "hi", "options": {"model": "gpt-4o"}}));
    assert!(result.is_err());

    let parsed = "gpt-4o".parse::<GeminiModel>();
    assert!(matches!(parsed, Err(QuillError::InvalidModel(ref m)) if m == "gpt-4o"));
    assert_eq!("gemini-2.5-flash".parse::<GeminiModel>().unwrap(), GeminiModel::Gemini25Flash);
}

#[test]
fn test_options_resolve_defaults() {
    let resolved = GenerationOptions::default().resolved();
    assert_eq!(resolved.temperature, Some(0.7));
    assert_eq!(resolved.top_p, Some(0.9));
    assert_eq!(resolved.top_k, Some(Number::from(32)));
    assert_eq!(resolved.max_output_tokens, Some(Number::from(512)));
    assert_eq!(resolved.model, Some(GeminiModel::Gemini15Flash));

    let custom = GenerationOptions::default()
        .with_temperature(0.1)
        .with_model(GeminiModel::Gemini20Flash)
        .resolved();
    assert_eq!(custom.temperature, Some(0.1));
    assert_eq!(custom.top_k, Some(Number::from(32)));
    assert_eq!(custom.model, Some(GeminiModel::Gemini20Flash));
}

#[test]
fn test_options_serialize_camel_case() {
    let value = serde_json::to_value(GenerationOptions::default().resolved()).unwrap();
    assert_eq!(
        value,
        json!({
            "temperature": 0.7,
            "topP": 0.9,
            "topK": 32,
            "maxOutputTokens": 512,
            "model": "gemini-1.5-flash"
        })
    );
}

#[test]
fn test_envelope_view_is_lenient() {
    let view = GenerationEnvelope::from_value(&json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": "x"}]}, "finishReason": "STOP"}],
        "usageMetadata": {"promptTokenCount": 2, "totalTokenCount": 5},
        "promptFeedback": {"blockReason": "SAFETY"}
    }));
    assert_eq!(view.finish_reason(), Some("STOP"));
    assert_eq!(view.block_reason(), Some("SAFETY"));
    assert_eq!(view.usage().unwrap()["totalTokenCount"], 5);

    let empty = GenerationEnvelope::from_value(&json!({"candidates": "garbage"}));
    assert_eq!(empty, GenerationEnvelope::default());
}

#[test]
fn test_upstream_status_truncates_body() {
    let body = "é".repeat(ERROR_BODY_LIMIT + 50);
    let err = QuillError::upstream_status(429, "Too Many Requests", &body);
    match &err {
        QuillError::UpstreamStatus { body, .. } => assert_eq!(body.chars().count(), ERROR_BODY_LIMIT),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.status(), Some(429));
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("Too Many Requests"));
}

#[test]
fn test_truncate_chars_short_input() {
    assert_eq!(truncate_chars("abc", 10), "abc");
    assert_eq!(truncate_chars("abcdef", 3), "abc");
}

#[test]
fn test_api_key_is_redacted() {
    assert!(ApiKey::new("").is_none());

    let key = ApiKey::new("sk-very-secret").unwrap();
    assert_eq!(key.expose(), "sk-very-secret");
    assert!(!format!("{key:?}").contains("sk-very-secret"));
    assert!(!format!("{key}").contains("sk-very-secret"));
}

#[test]
fn test_missing_credential_message() {
    let err = QuillError::MissingCredential("GEMINI_API_KEY");
    assert_eq!(err.to_string(), "GEMINI_API_KEY not set");
}

#[test]
fn test_whitespace_key_is_kept() {
    let key = ApiKey::new("  ").expect("only an empty key counts as missing");
    assert_eq!(key.expose(), "  ");
}

#[test]
fn test_envelope_error_reads_code_status_message() {
    let long_message = "m".repeat(ERROR_BODY_LIMIT + 10);
    let err = envelope_error(&json!({
        "error": {"code": 429, "status": "RESOURCE_EXHAUSTED", "message": long_message}
    }))
    .expect("Missing error");

    assert_eq!(err.status(), Some(429));
    match err {
        QuillError::UpstreamStatus { status_text, body, .. } => {
            assert_eq!(status_text, "RESOURCE_EXHAUSTED");
            assert_eq!(body.chars().count(), ERROR_BODY_LIMIT);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(envelope_error(&json!({})).is_none());
    assert!(envelope_error(&json!({"error": {"message": "no code"}})).is_none());
    assert!(envelope_error(&json!({"candidates": []})).is_none());
}
