use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::client::GeminiClient;
use crate::core::config::AppConfig;
use crate::core::models::{Category, Classification};
use crate::errors::PanoramaError;
use crate::prompt::build_classification_prompt;
use crate::relay::MessageClassifier;

/// Why a message ended up with a fallback classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingApiKey,
    Failed(String),
}

/// Result of one classification attempt, before it is flattened for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Classified(Classification),
    Fallback(FallbackReason),
}

impl ClassificationOutcome {
    #[must_use]
    pub fn into_classification(self) -> Classification {
        match self {
            ClassificationOutcome::Classified(c) => c,
            ClassificationOutcome::Fallback(FallbackReason::MissingApiKey) => {
                Classification::not_analyzed()
            }
            ClassificationOutcome::Fallback(FallbackReason::Failed(_)) => {
                Classification::analysis_error()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelVerdict {
    category: String,
    topic: String,
}

/// Parses the model's JSON answer. Categories outside the closed set are filed
/// under [`Category::Other`] with the model's topic kept.
///
/// # Errors
///
/// `ParseError` if `raw` is not a JSON object with string `category` and `topic`.
pub fn parse_verdict(raw: &str) -> Result<Classification, PanoramaError> {
    let verdict: ModelVerdict = serde_json::from_str(raw.trim())?;

    let category = Category::from_model_label(&verdict.category).unwrap_or_else(|| {
        debug!(category = %verdict.category, "Model answered with unknown category");
        Category::Other
    });

    Ok(Classification::new(category, verdict.topic.trim()))
}

/// Classifies message texts with Gemini. Never fails outward.
pub struct GeminiClassifier {
    client: Option<GeminiClient>,
}

impl GeminiClassifier {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let client = config.gemini_api_key.as_ref().map(|key| {
            GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_base_url.clone(),
            )
        });

        Self { client }
    }

    pub async fn classify_detailed(&self, text: &str) -> ClassificationOutcome {
        let Some(client) = &self.client else {
            warn!("GEMINI_API_KEY is not set; skipping classification");
            return ClassificationOutcome::Fallback(FallbackReason::MissingApiKey);
        };

        let prompt = build_classification_prompt(text);
        let result = client
            .generate_json(&prompt)
            .await
            .and_then(|raw| parse_verdict(&raw));

        match result {
            Ok(classification) => ClassificationOutcome::Classified(classification),
            Err(e) => {
                warn!("Classification failed, using fallback: {}", e);
                ClassificationOutcome::Fallback(FallbackReason::Failed(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl MessageClassifier for GeminiClassifier {
    async fn classify(&self, text: &str) -> Classification {
        self.classify_detailed(text).await.into_classification()
    }
}
