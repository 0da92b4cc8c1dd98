//! All Slack-specific functionality

pub mod client;
pub mod retriever;

// Re-export main types for convenience
pub use client::{HistoryRecord, SlackClient};
pub use retriever::{MESSAGE_BATCH_SIZE, SlackRetriever};
