use std::sync::Arc;

use crate::{
    client::GenerationBackend,
    display::DisplayPort,
    models::{png_data_uri, WordTriple},
};

pub const STORY_LOADING: &str = "Generating story...";
pub const IMAGE_LOADING: &str = "Generating picture...";
pub const STORY_FAILURE: &str = "Something went wrong while generating the story.";
pub const IMAGE_FAILURE: &str = "Something went wrong while generating the image.";
pub const MISSING_WORDS_ALERT: &str = "Please fill in all fields: noun, verb, and adjective.";
pub const MISSING_STORY_ALERT: &str = "Please generate a story first.";

/// Drives the two user-triggered sequences against an injected backend and
/// display. Failures are contained here; neither workflow can escape into
/// the caller or disturb the other beyond the shared section flag.
pub struct WorkflowRunner {
    backend: Arc<dyn GenerationBackend>,
    display: Arc<dyn DisplayPort>,
}

impl WorkflowRunner {
    pub fn new(backend: Arc<dyn GenerationBackend>, display: Arc<dyn DisplayPort>) -> Self {
        Self { backend, display }
    }

    /// Story sequence: loading indicator, presence check, one POST, verbatim
    /// display. Returns the story on success so the caller can hold it for
    /// the image sequence.
    pub async fn run_story(&self, words: WordTriple) -> Option<String> {
        self.display.set_story_text(STORY_LOADING);
        self.display.clear_image();
        self.display.set_image_section_visible(false);

        if !words.is_complete() {
            // The loading indicator stays put here, matching the hosted
            // frontend's behavior.
            self.display.alert(MISSING_WORDS_ALERT);
            return None;
        }

        match self.backend.generate_story(&words).await {
            Ok(story) => {
                self.display.set_story_text(&story);
                // Trim only for the emptiness test; the displayed text is
                // untouched.
                if !story.trim().is_empty() {
                    self.display.set_image_section_visible(true);
                }
                Some(story)
            }
            Err(e) => {
                log::error!("Story generation failed: {}", e);
                self.display.set_image_section_visible(false);
                self.display.set_story_text(STORY_FAILURE);
                None
            }
        }
    }

    /// Image sequence: reveal the section, loading indicator, prerequisite
    /// check, one POST, render the data URI.
    pub async fn run_image(&self, story: &str) {
        self.display.set_image_section_visible(true);
        self.display.set_image_text(IMAGE_LOADING);

        if story.trim().is_empty() {
            self.display.alert(MISSING_STORY_ALERT);
            return;
        }

        match self.backend.generate_image(story).await {
            Ok(b64) => {
                self.display.set_image_element(&png_data_uri(&b64));
            }
            Err(e) => {
                log::error!("Image generation failed: {}", e);
                self.display.set_image_text(IMAGE_FAILURE);
            }
        }
    }
}
