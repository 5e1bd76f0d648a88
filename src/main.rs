use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fs;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use storyforge::{
    logger, DisplayPort, GeneratorClient, GeneratorConfig, WordTriple, WorkflowRunner,
};

const IMAGE_FILE: &str = "story.png";
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Terminal rendition of the page: the story region prints to stdout, the
/// image region is a PNG written next to the binary.
struct ConsoleDisplay {
    image_section_visible: AtomicBool,
}

impl ConsoleDisplay {
    fn new() -> Self {
        Self {
            image_section_visible: AtomicBool::new(false),
        }
    }
}

impl DisplayPort for ConsoleDisplay {
    fn set_story_text(&self, text: &str) {
        println!("\n--- Story ---");
        println!("{}", text);
    }

    fn set_image_text(&self, text: &str) {
        println!("\n--- Picture ---");
        println!("{}", text);
    }

    fn set_image_element(&self, src: &str) {
        let b64 = src.strip_prefix(PNG_DATA_URI_PREFIX).unwrap_or(src);
        match BASE64.decode(b64) {
            Ok(bytes) => match fs::write(IMAGE_FILE, &bytes) {
                Ok(()) => {
                    println!("\n--- Picture ---");
                    println!("Saved to {} ({} bytes)", IMAGE_FILE, bytes.len());
                }
                Err(e) => {
                    log::warn!("Could not write {}: {}", IMAGE_FILE, e);
                    println!("\n--- Picture ---");
                    println!("(could not save the image)");
                }
            },
            Err(e) => {
                log::warn!("Image payload is not valid base64: {}", e);
                println!("\n--- Picture ---");
                println!("(could not decode the image)");
            }
        }
    }

    fn clear_image(&self) {
        log::debug!("Image region cleared");
    }

    fn set_image_section_visible(&self, visible: bool) {
        let was = self.image_section_visible.swap(visible, Ordering::SeqCst);
        if visible && !was {
            println!("(You can now generate a picture with option 2.)");
        }
    }

    fn alert(&self, message: &str) {
        println!("\n!! {}", message);
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::debug!("No .env file found, using system environment variables"),
    }

    logger::init_with_config(logger::LoggerConfig::development())?;

    let config = GeneratorConfig::from_env();
    log::info!("📖 Story endpoint: {}", config.story_url());
    log::info!("🖼️  Image endpoint: {}", config.image_url());

    let client = Arc::new(GeneratorClient::new(config)?);
    let display = Arc::new(ConsoleDisplay::new());
    let runner = WorkflowRunner::new(client, display);

    println!("storyforge — madlib story and picture generator");

    // The console stands in for the page: option 1 and 2 are the two
    // buttons, the current story is held here between the two workflows.
    let mut current_story: Option<String> = None;

    loop {
        println!();
        println!("1) Generate story");
        println!("2) Generate picture");
        println!("q) Quit");

        let choice = prompt("> ")?;
        match choice.as_str() {
            "1" => {
                let words = WordTriple::new(
                    prompt("Noun: ")?,
                    prompt("Verb: ")?,
                    prompt("Adjective: ")?,
                );
                if let Some(story) = runner.run_story(words).await {
                    current_story = Some(story);
                }
            }
            "2" => {
                let story = current_story.as_deref().unwrap_or("");
                runner.run_image(story).await;
            }
            "q" | "Q" => break,
            other => {
                if !other.is_empty() {
                    println!("Unknown option: {}", other);
                }
            }
        }
    }

    Ok(())
}
