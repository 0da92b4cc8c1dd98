//! Panorama - a relay that pulls recent messages from a Slack support channel,
//! classifies each one with Gemini and returns the enriched list over HTTP.
//!
//! # Architecture
//!
//! One request runs one linear pipeline:
//! 1. [`slack::SlackRetriever`] fetches a fixed-size batch of channel history
//!    and keeps only user-authored messages
//! 2. [`ai::GeminiClassifier`] classifies every message concurrently, falling
//!    back to a sentinel category/topic pair on any failure
//! 3. [`relay::analyze_channel`] merges each message with its classification,
//!    preserving retrieval order
//!
//! The pipeline is served either as an AWS Lambda (`panorama-api`) or as a
//! local axum server (`panorama-server`); both share [`api::routes`].
//!
//! # Example
//!
//! ```no_run
//! use panorama::ai::GeminiClassifier;
//! use panorama::core::config::AppConfig;
//! use panorama::relay::analyze_channel;
//! use panorama::slack::SlackRetriever;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     panorama::setup_logging();
//!
//!     let config = AppConfig {
//!         slack_bot_token: Some("xoxb-dummy".to_string()),
//!         slack_channel_id: Some("C12345678".to_string()),
//!         gemini_api_key: Some("dummy_gemini_key".to_string()),
//!         ..AppConfig::default()
//!     };
//!
//!     let retriever = SlackRetriever::new(&config);
//!     let classifier = GeminiClassifier::new(&config);
//!
//!     for msg in analyze_channel(&retriever, &classifier).await? {
//!         println!(
//!             "[{}] {}: {} -> {}",
//!             msg.message.timestamp,
//!             msg.message.author,
//!             msg.classification.category.label(),
//!             msg.classification.topic
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod relay;
pub mod slack;
pub mod utils;

/// Installs a JSON `tracing` subscriber for the Lambda binary.
///
/// Safe to call more than once: if a global subscriber is already set (another
/// call, or a test harness), the call is a no-op.
///
/// # Example
///
/// ```
/// panorama::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
