//! Gemini `generateContent` client
//!
//! Requests JSON-only output and returns the first candidate's text verbatim.

use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::errors::PanoramaError;
use crate::utils::http::build_client;

pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: Client,
}

/// Request body asking for a JSON-formatted completion of a single prompt.
#[must_use]
pub fn build_generate_payload(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": { "responseMimeType": "application/json" }
    })
}

/// Text of the first part of the first candidate, if present.
#[must_use]
pub fn extract_candidate_text(response: &Value) -> Option<&str> {
    response["candidates"][0]["content"]["parts"][0]["text"].as_str()
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: String, model: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.into(),
            http: build_client(),
        }
    }

    /// # Errors
    ///
    /// `HttpError` on transport failure, `GeminiError` on a non-2xx status or a
    /// response without candidate text, `ParseError` if the body is not JSON.
    pub async fn generate_json(&self, prompt: &str) -> Result<String, PanoramaError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        #[cfg(feature = "debug-logs")]
        debug!(%prompt, "Gemini prompt");

        debug!(model = %self.model, "Sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&build_generate_payload(prompt))
            .send()
            .await
            .map_err(|e| PanoramaError::HttpError(format!("Gemini request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Gemini API error");
            return Err(PanoramaError::GeminiError(format!("HTTP {status}")));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| PanoramaError::ParseError(format!("Gemini JSON parse error: {e}")))?;

        extract_candidate_text(&body)
            .map(ToString::to_string)
            .ok_or_else(|| {
                warn!(response = %body, "Unexpected Gemini response shape");
                PanoramaError::GeminiError("response has no candidate text".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_requests_json_output() {
        let payload = build_generate_payload("hello");
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            payload["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_extract_candidate_text() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":1}" }] } }]
        });
        assert_eq!(extract_candidate_text(&body), Some("{\"a\":1}"));
        assert_eq!(extract_candidate_text(&json!({ "candidates": [] })), None);
        assert_eq!(extract_candidate_text(&json!({})), None);
    }
}
