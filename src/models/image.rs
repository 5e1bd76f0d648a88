use serde::{Deserialize, Serialize};

use crate::error::{Result, StoryForgeError};

/// Request body for the image endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
}

/// Response shape of the image endpoint. The payload is a base64-encoded PNG.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePayload {
    #[serde(default)]
    pub b64_json: Option<String>,
}

impl ImagePayload {
    /// A 2xx response with a missing or empty payload is still a failure.
    pub fn into_b64(self) -> Result<String> {
        match self.b64_json {
            Some(b64) if !b64.is_empty() => Ok(b64),
            _ => Err(StoryForgeError::ResponseError(
                "No image data received from the server".into(),
            )),
        }
    }
}

/// Builds the data URI an image element renders from. MIME is fixed to PNG.
pub fn png_data_uri(b64: &str) -> String {
    format!("data:image/png;base64,{}", b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_data_extracts() {
        let payload: ImagePayload =
            serde_json::from_str(r#"{"b64_json": "iVBORw0KG..."}"#).unwrap();
        assert_eq!(payload.into_b64().unwrap(), "iVBORw0KG...");
    }

    #[test]
    fn test_missing_field_is_a_failure() {
        let payload: ImagePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.into_b64().is_err());
    }

    #[test]
    fn test_empty_field_is_a_failure() {
        let payload: ImagePayload = serde_json::from_str(r#"{"b64_json": ""}"#).unwrap();
        assert!(payload.into_b64().is_err());
    }

    #[test]
    fn test_png_data_uri() {
        assert_eq!(
            png_data_uri("iVBORw0KG..."),
            "data:image/png;base64,iVBORw0KG..."
        );
    }
}
