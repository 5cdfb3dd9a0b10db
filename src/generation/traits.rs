use crate::generation::types::GenerationRequest;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for schema-constrained text generation backends
/// Lets callers swap the live service for a scripted double in tests
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send the prompt and schema, returning the raw response text
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get the model identifier requests are sent to
    fn model_name(&self) -> &str;
}
