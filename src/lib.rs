pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod logger;
pub mod models;
pub mod workflow;

pub use client::{GenerationBackend, GeneratorClient, ImageClient, StoryClient};
pub use config::GeneratorConfig;
pub use display::DisplayPort;
pub use error::{Result, StoryForgeError};
pub use models::{png_data_uri, ImageGenerationRequest, ImagePayload, WordTriple};
pub use workflow::WorkflowRunner;
