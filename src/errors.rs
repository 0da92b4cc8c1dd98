use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanoramaError {
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    #[error("Slack API error: {0}")]
    SlackApiError(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse upstream response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for PanoramaError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            PanoramaError::ParseError(error.to_string())
        } else {
            PanoramaError::HttpError(error.to_string())
        }
    }
}

impl From<serde_json::Error> for PanoramaError {
    fn from(error: serde_json::Error) -> Self {
        PanoramaError::ParseError(error.to_string())
    }
}
