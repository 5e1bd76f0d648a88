use std::fmt;

#[derive(Debug)]
pub enum StoryForgeError {
    ConfigError(String),
    InputError(String),
    RequestError(String),
    ServerError(u16),
    ResponseError(String),
}

impl fmt::Display for StoryForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryForgeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            StoryForgeError::InputError(msg) => write!(f, "Input error: {}", msg),
            StoryForgeError::RequestError(msg) => write!(f, "Request error: {}", msg),
            StoryForgeError::ServerError(status) => write!(f, "Server error: {}", status),
            StoryForgeError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl std::error::Error for StoryForgeError {}

pub type Result<T> = std::result::Result<T, StoryForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_carries_status() {
        let err = StoryForgeError::ServerError(503);
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn test_input_error_display() {
        let err = StoryForgeError::InputError("noun is empty".into());
        assert_eq!(err.to_string(), "Input error: noun is empty");
    }
}
