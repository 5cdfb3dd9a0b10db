use crate::generation::traits::GenerationClient;
use crate::generation::types::GenerationRequest;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Where a returned value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Generated,
    Fallback,
}

/// A value together with the path that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub fn generated(value: T) -> Self {
        Self {
            value,
            source: Source::Generated,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// Remove a surrounding ```json fence from model output.
///
/// Only a leading "```json" (plus one newline) and a trailing "```" are removed;
/// text without fences comes back trimmed and otherwise untouched.
pub fn strip_json_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = match trimmed.strip_prefix("```json") {
        Some(rest) => rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest),
        None => trimmed,
    };
    body.strip_suffix("```").unwrap_or(body)
}

async fn generate_and_decode<T, C>(client: &C, request: &GenerationRequest) -> Result<T>
where
    T: DeserializeOwned,
    C: GenerationClient + ?Sized,
{
    let text = client.generate(request).await?;
    let cleaned = strip_json_fence(&text);
    serde_json::from_str(cleaned).context("Generated text is not valid JSON for the requested shape")
}

/// Run a generation request, substituting `fallback` on any failure.
///
/// Never returns an error: transport failures and undecodable output both yield
/// the fallback, marked as such.
pub async fn fetch_with_fallback<T, C>(client: &C, request: &GenerationRequest, fallback: T) -> Sourced<T>
where
    T: DeserializeOwned,
    C: GenerationClient + ?Sized,
{
    match generate_and_decode(client, request).await {
        Ok(value) => {
            debug!(
                "Generation '{}' succeeded using {}",
                request.label,
                client.model_name()
            );
            Sourced::generated(value)
        }
        Err(e) => {
            warn!(
                "Generation call failed for key \"{}\". Falling back to mock data: {:#}",
                request.label, e
            );
            Sourced::fallback(fallback)
        }
    }
}
