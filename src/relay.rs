//! Fetch-then-enrich pipeline
//!
//! Retrieval failures abort the whole run; classification never fails, so
//! every retrieved message comes back exactly once, in retrieval order.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{error, info};

use crate::core::models::{Classification, EnrichedMessage, RawMessage};
use crate::errors::PanoramaError;

/// Supplies the batch of messages to enrich.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// # Errors
    ///
    /// Any error here is fatal to the request.
    async fn fetch_messages(&self) -> Result<Vec<RawMessage>, PanoramaError>;
}

/// Assigns a category/topic pair to one message text. Total: failures must be
/// folded into a fallback classification by the implementation.
#[async_trait]
pub trait MessageClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Classification;
}

/// Retrieves one batch, classifies every message concurrently and merges each
/// message with its own classification.
///
/// All classification futures are created before any is awaited and are
/// driven together by `join_all`, which yields results in input order.
/// There is no cap on in-flight calls; the batch size bounds the fan-out.
///
/// # Errors
///
/// Propagates the source's error unchanged. No classification is attempted in
/// that case.
pub async fn analyze_channel<S, C>(
    source: &S,
    classifier: &C,
) -> Result<Vec<EnrichedMessage>, PanoramaError>
where
    S: MessageSource + ?Sized,
    C: MessageClassifier + ?Sized,
{
    let messages = source.fetch_messages().await.map_err(|e| {
        error!("Message retrieval failed: {}", e);
        e
    })?;

    info!(count = messages.len(), "Classifying retrieved messages");

    let classifications =
        join_all(messages.iter().map(|msg| classifier.classify(&msg.text))).await;

    let enriched: Vec<EnrichedMessage> = messages
        .into_iter()
        .zip(classifications)
        .map(|(message, classification)| EnrichedMessage::new(message, classification))
        .collect();

    info!(count = enriched.len(), "Analysis complete");
    Ok(enriched)
}
