//! Minimal Google Gemini API client.
//!
//! This crate provides a focused client for the `generateContent` endpoint
//! with:
//! - Non-streaming text completions
//! - Structured JSON output via a response schema
//! - Typed errors for transport, API, and parse failures

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Errors that can occur when using the Gemini client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key not configured")]
    NoApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

/// Gemini API client.
#[derive(Clone)]
pub struct Gemini {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl Gemini {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .connect_timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a Gemini client from the GEMINI_API_KEY environment variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| Error::NoApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Set the default model for this client.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Send a content-generation request and return the full response.
    pub async fn generate(&self, request: Request) -> Result<Response, Error> {
        let api_request = build_api_request(&request);
        let headers = self.build_headers()?;
        let model = request.model.as_deref().unwrap_or(&self.model);
        let url = format!("{API_BASE}/models/{model}:generateContent");

        tracing::debug!(model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&api_request)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "generateContent returned error status");
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        parse_response(api_response)
    }

    fn build_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| Error::Config(format!("Invalid API key: {e}")))?,
        );
        Ok(headers)
    }
}

// ============================================================================
// Public types
// ============================================================================

/// A content-generation request to send to Gemini.
#[derive(Debug, Clone)]
pub struct Request {
    pub model: Option<String>,
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    /// When set, the model is constrained to return JSON matching this
    /// schema (Gemini's OpenAPI-style schema with uppercase type names).
    pub response_schema: Option<serde_json::Value>,
}

impl Request {
    /// Create a new request with the given user prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            system_instruction: None,
            temperature: None,
            response_schema: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Request structured JSON output matching the given schema.
    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// A completion response from Gemini.
#[derive(Debug, Clone)]
pub struct Response {
    /// Concatenated text of all parts of the first candidate.
    pub text: String,
    /// Why the model stopped generating, if reported.
    pub finish_reason: Option<FinishReason>,
    /// Token usage information, if reported.
    pub usage: Option<Usage>,
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

/// Token usage information.
#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub response_tokens: usize,
}

// ============================================================================
// Internal API types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<ApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ApiSystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<ApiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct ApiSystemInstruction {
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    usage_metadata: Option<ApiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiCandidate {
    content: Option<ApiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUsageMetadata {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
}

fn build_api_request(request: &Request) -> ApiRequest {
    let generation_config = if request.temperature.is_some() || request.response_schema.is_some() {
        Some(ApiGenerationConfig {
            temperature: request.temperature,
            response_mime_type: request
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string()),
            response_schema: request.response_schema.clone(),
        })
    } else {
        None
    };

    ApiRequest {
        contents: vec![ApiContent {
            role: Some("user".to_string()),
            parts: vec![ApiPart {
                text: request.prompt.clone(),
            }],
        }],
        system_instruction: request.system_instruction.as_ref().map(|s| {
            ApiSystemInstruction {
                parts: vec![ApiPart { text: s.clone() }],
            }
        }),
        generation_config,
    }
}

fn parse_response(api_response: ApiResponse) -> Result<Response, Error> {
    let candidate = api_response
        .candidates
        .into_iter()
        .next()
        .ok_or(Error::EmptyResponse)?;

    let finish_reason = candidate.finish_reason.as_deref().map(|r| match r {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        _ => FinishReason::Other,
    });

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }

    Ok(Response {
        text,
        finish_reason,
        usage: api_response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            response_tokens: u.candidates_token_count,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Gemini::new("test-key");
        assert_eq!(client.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_client_with_model() {
        let client = Gemini::new("test-key").with_model("gemini-2.0-pro");
        assert_eq!(client.model, "gemini-2.0-pro");
    }

    #[test]
    fn test_request_builder() {
        let request = Request::new("Hello")
            .with_temperature(0.7)
            .with_json_schema(serde_json::json!({ "type": "ARRAY" }));

        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.temperature, Some(0.7));
        assert!(request.response_schema.is_some());
    }

    #[test]
    fn test_api_request_sets_json_mime_type() {
        let request = Request::new("Hi").with_json_schema(serde_json::json!({ "type": "ARRAY" }));
        let api_request = build_api_request(&request);
        let config = api_request.generation_config.expect("config");
        assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_api_request_omits_config_when_unset() {
        let api_request = build_api_request(&Request::new("Hi"));
        assert!(api_request.generation_config.is_none());
    }

    #[test]
    fn test_parse_response_concatenates_parts() {
        let api_response: ApiResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": { "role": "model", "parts": [{"text": "[{"}, {"text": "}]"}] },
                    "finishReason": "STOP"
                }],
                "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 34 }
            }"#,
        )
        .unwrap();

        let response = parse_response(api_response).unwrap();
        assert_eq!(response.text, "[{}]");
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.response_tokens, 34);
    }

    #[test]
    fn test_parse_response_no_candidates() {
        let api_response: ApiResponse = serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
        assert!(matches!(
            parse_response(api_response),
            Err(Error::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_response_empty_text() {
        let api_response: ApiResponse = serde_json::from_str(
            r#"{ "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }] }"#,
        )
        .unwrap();
        assert!(matches!(
            parse_response(api_response),
            Err(Error::EmptyResponse)
        ));
    }
}
