use std::env;

pub const DEFAULT_STORY_URL: &str =
    "https://openai-worker.kathleen-elizabeth-west.workers.dev/madlib";
pub const DEFAULT_IMAGE_URL: &str =
    "https://openai-worker.kathleen-elizabeth-west.workers.dev/image";

/// Endpoint configuration for the two generation services.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub story_url: Option<String>,
    pub image_url: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            story_url: None,
            image_url: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let story_url = env::var("STORYFORGE_STORY_URL").ok();
        let image_url = env::var("STORYFORGE_IMAGE_URL").ok();

        GeneratorConfig {
            story_url,
            image_url,
        }
    }

    pub fn with_story_url(mut self, url: impl Into<String>) -> Self {
        self.story_url = Some(url.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Story endpoint, falling back to the hosted worker.
    pub fn story_url(&self) -> &str {
        self.story_url.as_deref().unwrap_or(DEFAULT_STORY_URL)
    }

    /// Image endpoint, falling back to the hosted worker.
    pub fn image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_hosted_worker() {
        let config = GeneratorConfig::new();
        assert_eq!(config.story_url(), DEFAULT_STORY_URL);
        assert_eq!(config.image_url(), DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::new()
            .with_story_url("http://localhost:8080/madlib")
            .with_image_url("http://localhost:8080/image");
        assert_eq!(config.story_url(), "http://localhost:8080/madlib");
        assert_eq!(config.image_url(), "http://localhost:8080/image");
    }
}
