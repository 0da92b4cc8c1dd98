use std::env;

use url::Url;

use crate::errors::PanoramaError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_SLACK_API_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup and handed to the pipeline.
///
/// The Slack and Gemini secrets are optional here on purpose: a missing Slack
/// credential is reported per request by the retriever, and a missing Gemini
/// key degrades every classification to the fallback pair.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: Option<String>,
    pub slack_channel_id: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub slack_api_base_url: String,
    pub gemini_api_base_url: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slack_bot_token: None,
            slack_channel_id: None,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            slack_api_base_url: DEFAULT_SLACK_API_BASE_URL.to_string(),
            gemini_api_base_url: DEFAULT_GEMINI_API_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `PanoramaError::ConfigError` if `PORT` is not a valid port number
    /// or one of the base URL overrides is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, PanoramaError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PanoramaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| PanoramaError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        let slack_api_base_url = validated_base_url(
            "SLACK_API_BASE_URL",
            var("SLACK_API_BASE_URL").as_deref(),
            DEFAULT_SLACK_API_BASE_URL,
        )?;
        let gemini_api_base_url = validated_base_url(
            "GEMINI_API_BASE_URL",
            var("GEMINI_API_BASE_URL").as_deref(),
            DEFAULT_GEMINI_API_BASE_URL,
        )?;

        Ok(Self {
            slack_bot_token: var("SLACK_BOT_TOKEN"),
            slack_channel_id: var("SLACK_CHANNEL_ID"),
            gemini_api_key: var("GEMINI_API_KEY"),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            slack_api_base_url,
            gemini_api_base_url,
            port,
        })
    }
}

fn validated_base_url(
    key: &str,
    value: Option<&str>,
    default: &str,
) -> Result<String, PanoramaError> {
    let Some(raw) = value else {
        return Ok(default.to_string());
    };

    let parsed =
        Url::parse(raw).map_err(|e| PanoramaError::ConfigError(format!("{key}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PanoramaError::ConfigError(format!(
            "{key}: unsupported scheme '{}'",
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
