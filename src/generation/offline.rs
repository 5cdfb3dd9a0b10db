use crate::generation::traits::GenerationClient;
use crate::generation::types::GenerationRequest;
use anyhow::Result;
use async_trait::async_trait;

/// Client used when no generation service is available.
/// Every request fails, so callers are served their fallback data.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineClient;

#[async_trait]
impl GenerationClient for OfflineClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        anyhow::bail!("Generation disabled (offline) for '{}'", request.label)
    }

    fn model_name(&self) -> &str {
        "offline"
    }
}
