pub mod image_client;
pub mod story_client;
pub mod traits;

use crate::{
    config::GeneratorConfig,
    error::{Result, StoryForgeError},
    models::WordTriple,
};
use async_trait::async_trait;
use reqwest::{Client, Url};

pub use image_client::ImageClient;
pub use story_client::StoryClient;
pub use traits::GenerationBackend;

/// HTTP client pair for the two generation endpoints, sharing one
/// connection pool.
#[derive(Debug, Clone)]
pub struct GeneratorClient {
    story_client: StoryClient,
    image_client: ImageClient,
}

impl GeneratorClient {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let story_url = validate_url("story", config.story_url())?;
        let image_url = validate_url("image", config.image_url())?;

        let client = Client::new();

        Ok(Self {
            story_client: StoryClient::new(client.clone(), story_url),
            image_client: ImageClient::new(client, image_url),
        })
    }

    pub fn story(&self) -> &StoryClient {
        &self.story_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

fn validate_url(name: &str, url: &str) -> Result<String> {
    Url::parse(url).map_err(|e| {
        StoryForgeError::ConfigError(format!("Invalid {} endpoint URL: {}", name, e))
    })?;
    Ok(url.to_string())
}

#[async_trait]
impl GenerationBackend for GeneratorClient {
    async fn generate_story(&self, words: &WordTriple) -> Result<String> {
        self.story_client.generate(words).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        self.image_client.generate(prompt).await
    }
}
