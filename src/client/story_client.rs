use crate::{
    error::{Result, StoryForgeError},
    models::WordTriple,
};
use reqwest::Client;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct StoryClient {
    client: Client,
    url: String,
}

impl StoryClient {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// POST the word triple and read the whole response body as the story.
    /// Any 2xx status with any text body counts as success.
    pub async fn generate(&self, words: &WordTriple) -> Result<String> {
        let body = serde_json::to_string(words)
            .map_err(|e| StoryForgeError::RequestError(e.to_string()))?;

        log::info!("Requesting story from {}", self.url);
        log::debug!("Story request payload: {}", body);

        let started = Instant::now();

        // The worker expects the JSON text under a text/plain content type;
        // keep the mismatch, the backend contract depends on it.
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| StoryForgeError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoryForgeError::ServerError(status.as_u16()));
        }

        let story = response
            .text()
            .await
            .map_err(|e| StoryForgeError::ResponseError(e.to_string()))?;

        log::debug!(
            "Story received in {}ms ({} bytes)",
            started.elapsed().as_millis(),
            story.len()
        );

        Ok(story)
    }
}
