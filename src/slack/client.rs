//! Slack Web API client
//!
//! Only `conversations.history` is needed; the call is made with plain reqwest
//! so the base URL can be pointed at a local server.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::PanoramaError;
use crate::utils::http::build_client;

/// One entry of the `messages` array returned by `conversations.history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub subtype: Option<String>,
    pub user: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub ts: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: bool,
    error: Option<String>,
    #[serde(default)]
    messages: Vec<HistoryRecord>,
}

pub struct SlackClient {
    token: String,
    base_url: String,
    http: Client,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String, base_url: impl Into<String>) -> Self {
        Self {
            token,
            base_url: base_url.into(),
            http: build_client(),
        }
    }

    /// Fetches at most `limit` of the latest records in `channel_id`, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` on transport failure, `SlackApiError` on a non-2xx
    /// status or an `ok: false` body (carrying Slack's error code), and
    /// `ParseError` if the body is not the expected JSON shape.
    pub async fn get_channel_history(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<HistoryRecord>, PanoramaError> {
        let url = format!("{}/conversations.history", self.base_url);
        let limit_param = limit.to_string();
        debug!(%url, channel_id, limit, "Requesting channel history");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("channel", channel_id), ("limit", limit_param.as_str())])
            .send()
            .await
            .map_err(|e| PanoramaError::HttpError(format!("conversations.history: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PanoramaError::SlackApiError(format!(
                "conversations.history HTTP {status}: {body}"
            )));
        }

        let body: HistoryResponse = resp.json().await.map_err(|e| {
            PanoramaError::ParseError(format!("conversations.history JSON parse error: {e}"))
        })?;

        if !body.ok {
            return Err(PanoramaError::SlackApiError(
                body.error.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        info!(
            channel_id,
            count = body.messages.len(),
            "Fetched channel history records"
        );

        Ok(body.messages)
    }
}
