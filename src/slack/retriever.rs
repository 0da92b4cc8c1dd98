use async_trait::async_trait;
use tracing::{error, info};

use super::client::SlackClient;
use crate::core::config::AppConfig;
use crate::core::models::RawMessage;
use crate::errors::PanoramaError;
use crate::relay::MessageSource;
use crate::utils::filters::filter_user_messages;

/// Maximum number of history records requested per run.
pub const MESSAGE_BATCH_SIZE: u32 = 20;

/// Pulls the latest user messages from the configured channel.
pub struct SlackRetriever {
    token: Option<String>,
    channel_id: Option<String>,
    base_url: String,
}

impl SlackRetriever {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            token: config.slack_bot_token.clone(),
            channel_id: config.slack_channel_id.clone(),
            base_url: config.slack_api_base_url.clone(),
        }
    }

    fn credentials(&self) -> Result<(&str, &str), PanoramaError> {
        match (self.token.as_deref(), self.channel_id.as_deref()) {
            (Some(token), Some(channel)) => Ok((token, channel)),
            _ => Err(PanoramaError::ConfigError(
                "SLACK_BOT_TOKEN or SLACK_CHANNEL_ID is not set".to_string(),
            )),
        }
    }

    /// # Errors
    ///
    /// `ConfigError` if the bot token or channel id is missing (no request is
    /// made), otherwise whatever [`SlackClient::get_channel_history`] returns.
    pub async fn retrieve(&self) -> Result<Vec<RawMessage>, PanoramaError> {
        let (token, channel_id) = self.credentials().map_err(|e| {
            error!("Cannot fetch Slack messages: {}", e);
            e
        })?;

        let client = SlackClient::new(token.to_string(), self.base_url.clone());
        let records = client
            .get_channel_history(channel_id, MESSAGE_BATCH_SIZE)
            .await?;

        let fetched = records.len();
        let messages = filter_user_messages(records);
        info!(
            fetched,
            kept = messages.len(),
            "Filtered channel history to user messages"
        );

        Ok(messages)
    }
}

#[async_trait]
impl MessageSource for SlackRetriever {
    async fn fetch_messages(&self) -> Result<Vec<RawMessage>, PanoramaError> {
        self.retrieve().await
    }
}
