//! All AI/LLM functionality

pub mod classifier;
pub mod client;

// Re-export main types for convenience
pub use classifier::{ClassificationOutcome, FallbackReason, GeminiClassifier};
pub use client::GeminiClient;
