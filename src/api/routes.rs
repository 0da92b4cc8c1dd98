//! Route table for the relay.
//!
//! - `GET /`             liveness text
//! - `GET /api/messages` retrieve, classify and return the channel's messages
//! - `OPTIONS *`         CORS preflight

use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::helpers::{ApiResponse, PROCESSING_FAILED, err_response, no_content, ok_json, ok_text};
use crate::ai::GeminiClassifier;
use crate::core::config::AppConfig;
use crate::relay::analyze_channel;
use crate::slack::SlackRetriever;

pub const MESSAGES_PATH: &str = "/api/messages";
pub const NOT_FOUND: &str = "Rota não encontrada.";
pub const METHOD_NOT_ALLOWED: &str = "Método não permitido.";
pub const HEALTH_MESSAGE: &str = "Servidor do Panorama de Atendimento está a funcionar!";

#[must_use]
pub fn health() -> ApiResponse {
    ok_text(HEALTH_MESSAGE)
}

/// Runs the full pipeline against the configured channel.
pub async fn messages(config: &AppConfig) -> ApiResponse {
    let retriever = SlackRetriever::new(config);
    let classifier = GeminiClassifier::new(config);

    match analyze_channel(&retriever, &classifier).await {
        Ok(enriched) => {
            info!(count = enriched.len(), "Sending analyzed messages");
            ok_json(&enriched)
        }
        Err(e) => {
            error!("Failed to serve {}: {}", MESSAGES_PATH, e);
            err_response(500, PROCESSING_FAILED, Some(&e.to_string()))
        }
    }
}

/// Routes one request by method and path.
pub async fn dispatch(config: &AppConfig, method: &str, path: &str) -> ApiResponse {
    let span = info_span!(
        "request",
        correlation_id = %Uuid::new_v4(),
        method = %method,
        path = %path
    );

    async move {
        info!("Received request");

        if method.eq_ignore_ascii_case("OPTIONS") {
            return no_content();
        }

        let normalized = normalize_path(path);
        let known = normalized == "/" || normalized == MESSAGES_PATH;

        if !known {
            return err_response(404, NOT_FOUND, Some(path));
        }

        if !method.eq_ignore_ascii_case("GET") {
            return err_response(405, METHOD_NOT_ALLOWED, Some(method));
        }

        if normalized == "/" {
            health()
        } else {
            messages(config).await
        }
    }
    .instrument(span)
    .await
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/api/messages/"), "/api/messages");
        assert_eq!(normalize_path("/api/messages"), "/api/messages");
    }
}
