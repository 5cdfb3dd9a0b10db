use crate::config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::generation::traits::GenerationClient;
use crate::generation::types::{GenerationRequest, Schema};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures talking to the generation endpoint
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

/// Gemini `generateContent` client with JSON response mode
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::build(
            api_key.into(),
            model.into(),
            DEFAULT_BASE_URL.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client from loaded configuration; requires an API key
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        Self::build(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
            config.timeout()?,
        )
    }

    fn build(api_key: String, model: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Schema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

fn build_body(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart {
                text: &request.prompt,
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: &request.schema,
        },
    }
}

/// Pull the generated text out of a decoded response body
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    if let Some(error) = response.error {
        return Err(GenerationError::Api(error.message));
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GenerationError::Blocked(reason));
        }
        return Err(GenerationError::EmptyResponse);
    }

    Ok(text)
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let url = self.endpoint();
        debug!("Sending generation request '{}' to {}", request.label, url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request))
            .send()
            .await
            .context("Failed to reach generation endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Generation endpoint returned status: {}", status);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let decoded: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode generation response")?;

        let text = extract_text(decoded)?;
        debug!("Received {} bytes for '{}'", text.len(), request.label);
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
