use crate::{error::Result, models::WordTriple};
use async_trait::async_trait;

/// Network seam between the workflows and the generation endpoints.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a short story from the three words. Returns the raw story
    /// text exactly as the endpoint produced it.
    async fn generate_story(&self, words: &WordTriple) -> Result<String>;

    /// Generate an illustration for the prompt. Returns the base64-encoded
    /// PNG bytes.
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}
