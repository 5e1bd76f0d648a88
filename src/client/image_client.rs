use crate::{
    error::{Result, StoryForgeError},
    models::{ImageGenerationRequest, ImagePayload},
};
use reqwest::Client;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    url: String,
}

impl ImageClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// POST the prompt and extract the base64 PNG from the JSON response.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = ImageGenerationRequest {
            prompt: prompt.to_string(),
        };

        log::info!("Requesting image from {}", self.url);

        let started = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| StoryForgeError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoryForgeError::ServerError(status.as_u16()));
        }

        let payload: ImagePayload = response
            .json()
            .await
            .map_err(|e| StoryForgeError::ResponseError(e.to_string()))?;

        let b64 = payload.into_b64()?;

        log::debug!(
            "Image received in {}ms ({} base64 chars)",
            started.elapsed().as_millis(),
            b64.len()
        );

        Ok(b64)
    }
}
